//! # ladder-core
//!
//! Foundation crate for the word ladder engine.
//! Defines the shared word type, error enums, configuration,
//! cancellation, and logging setup used by every other crate.

pub mod config;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;

pub use config::LadderConfig;
pub use errors::{ConfigError, DictionaryError, LadderErrorCode, SearchError};
pub use traits::CancellationToken;
pub use types::Word;
