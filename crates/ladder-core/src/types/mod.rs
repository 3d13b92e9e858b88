//! Shared value types.

pub mod collections;
pub mod word;

pub use word::Word;
