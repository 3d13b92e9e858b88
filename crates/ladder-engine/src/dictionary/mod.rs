//! Dictionary storage and word list parsing.

pub mod parse;
pub mod word_set;

pub use parse::{parse_words, read_words};
pub use word_set::WordSet;
