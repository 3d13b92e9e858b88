//! # ladder-engine
//!
//! Shortest word ladder search. A ladder is a sequence of dictionary words
//! where each step changes exactly one letter.
//!
//! - `dictionary`: `WordSet` with per-word visited flags, word list parsing
//! - `adjacency`: the one-letter-difference test
//! - `path`: `LadderPath`, a persistent path that branches without copying
//! - `frontier`: FIFO queue of paths forming the BFS wavefront
//! - `search`: `LadderSearch`, request validation, and `find_ladder`

pub mod adjacency;
pub mod dictionary;
pub mod frontier;
pub mod path;
pub mod search;

pub use adjacency::is_one_edit;
pub use dictionary::{parse_words, read_words, WordSet};
pub use frontier::Frontier;
pub use path::LadderPath;
pub use search::{
    find_ladder, search, validate_request, LadderSearch, SearchOptions, SearchOutcome,
    SearchReport, SearchState, SearchStats,
};
