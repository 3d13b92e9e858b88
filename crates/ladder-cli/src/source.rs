//! Dictionary file loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ladder_core::errors::DictionaryError;
use ladder_engine::{read_words, WordSet};

/// Read a whitespace-separated word list and build a `WordSet`.
pub fn load_dictionary(path: &Path) -> Result<WordSet, DictionaryError> {
    let io_error = |e: std::io::Error| DictionaryError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let file = File::open(path).map_err(io_error)?;
    let words = read_words(BufReader::new(file)).map_err(io_error)?;
    tracing::debug!(path = %path.display(), words = words.len(), "read dictionary file");
    WordSet::load(words)
}
