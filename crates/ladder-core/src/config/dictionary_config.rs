//! Dictionary source settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Fixed resource name used when nothing else is configured.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path of the whitespace-separated word list.
    pub path: Option<PathBuf>,
}

impl DictionaryConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY_PATH))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match &self.path {
            Some(path) if path.as_os_str().to_string_lossy().trim().is_empty() => {
                Err(ConfigError::Invalid {
                    field: "dictionary.path".to_string(),
                    message: "must not be blank".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
