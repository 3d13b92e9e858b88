//! Shared traits and handles used across ladder crates.

pub mod cancellation;

pub use cancellation::CancellationToken;
