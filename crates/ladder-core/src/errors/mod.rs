//! Error enums, one per concern, each carrying a stable error code.

pub mod config_error;
pub mod dictionary_error;
pub mod error_code;
pub mod search_error;

pub use config_error::ConfigError;
pub use dictionary_error::DictionaryError;
pub use error_code::LadderErrorCode;
pub use search_error::{InvalidInputReason, SearchError};
