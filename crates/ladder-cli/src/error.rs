//! CLI error type and exit code mapping.

use ladder_core::errors::{ConfigError, DictionaryError, LadderErrorCode, SearchError};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    /// The search ran to completion, whether or not a ladder exists.
    Success = 0,
    /// Validation, dictionary, config, or resource failure.
    Failure = -1,
}

impl CliExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("failed to read input: {message}")]
    Input { message: String },

    #[error("failed to write output: {message}")]
    Output { message: String },
}

impl CliError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Dictionary(e) => e.error_code(),
            Self::Search(e) => e.error_code(),
            Self::Input { .. } | Self::Output { .. } => "IO_ERROR",
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Output {
            message: e.to_string(),
        }
    }
}
