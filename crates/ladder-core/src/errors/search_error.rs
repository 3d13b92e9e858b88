use std::fmt;

use super::dictionary_error::DictionaryError;
use super::error_code::{self, LadderErrorCode};

/// Why a start/goal pair was rejected before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputReason {
    LengthMismatch,
    GoalNotInDictionary,
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LengthMismatch => "length mismatch",
            Self::GoalNotInDictionary => "goal not in dictionary",
        })
    }
}

/// Failures raised while validating or running a ladder search.
///
/// An exhausted search is not represented here: running out of
/// candidates is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid input ({reason}): start {start:?}, goal {goal:?}")]
    InvalidInput {
        start: String,
        goal: String,
        reason: InvalidInputReason,
    },

    #[error("path has no words")]
    EmptyPath,

    #[error("frontier queue is empty")]
    QueueEmpty,

    #[error("resource exhaustion: cannot grow {what} to {requested} entries")]
    ResourceExhaustion { what: &'static str, requested: usize },

    #[error("search cancelled after expanding {expanded} paths")]
    Cancelled { expanded: usize },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

impl LadderErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::EmptyPath => error_code::EMPTY_PATH,
            Self::QueueEmpty => error_code::QUEUE_EMPTY,
            Self::ResourceExhaustion { .. } => error_code::RESOURCE_EXHAUSTION,
            Self::Cancelled { .. } => error_code::CANCELLED,
            Self::Dictionary(inner) => inner.error_code(),
        }
    }
}
