use super::error_code::{self, LadderErrorCode};

/// Failures building or querying a word set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary contains no words")]
    EmptyDictionary,

    #[error("word not found in dictionary: {word}")]
    WordNotFound { word: String },

    #[error("failed to read dictionary {path}: {message}")]
    Io { path: String, message: String },
}

impl LadderErrorCode for DictionaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDictionary => error_code::EMPTY_DICTIONARY,
            Self::WordNotFound { .. } => error_code::WORD_NOT_FOUND,
            Self::Io { .. } => error_code::DICTIONARY_IO,
        }
    }
}
