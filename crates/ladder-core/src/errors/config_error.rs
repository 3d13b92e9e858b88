use super::error_code::{self, LadderErrorCode};

/// Failures loading `ladder.toml`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config: {message}")]
    Parse { message: String },

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: String, message: String },
}

impl LadderErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
