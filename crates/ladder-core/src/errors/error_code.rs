//! Stable error codes surfaced to callers and logs.

pub const EMPTY_DICTIONARY: &str = "EMPTY_DICTIONARY";
pub const WORD_NOT_FOUND: &str = "WORD_NOT_FOUND";
pub const DICTIONARY_IO: &str = "DICTIONARY_IO";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const EMPTY_PATH: &str = "EMPTY_PATH";
pub const QUEUE_EMPTY: &str = "QUEUE_EMPTY";
pub const RESOURCE_EXHAUSTION: &str = "RESOURCE_EXHAUSTION";
pub const CANCELLED: &str = "CANCELLED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Implemented by every error enum in the workspace.
pub trait LadderErrorCode {
    fn error_code(&self) -> &'static str;
}
