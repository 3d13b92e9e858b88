//! Layered configuration: defaults, then `ladder.toml`, then environment.

pub mod dictionary_config;
pub mod search_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use dictionary_config::DictionaryConfig;
pub use search_config::SearchConfig;

use crate::errors::ConfigError;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "ladder.toml";

/// Environment variable overriding `dictionary.path`.
pub const ENV_DICTIONARY: &str = "WORD_LADDER_DICTIONARY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    pub dictionary: DictionaryConfig,
    pub search: SearchConfig,
}

impl LadderConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a run.
    ///
    /// An explicit path must exist. Without one, `root/ladder.toml` is used
    /// when present and defaults otherwise. Environment overrides are
    /// applied last.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        let config = match candidate {
            Some(path) => {
                let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Self::from_toml(&text)?
            }
            None => Self::default(),
        };

        let config = config.with_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in `load`).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_DICTIONARY).filter(|p| !p.trim().is_empty()) {
            self.dictionary.path = Some(path.into());
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dictionary.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = LadderConfig::default();
        assert_eq!(config.dictionary.effective_path(), PathBuf::from("dictionary.txt"));
        assert_eq!(config.search.effective_max_frontier(), None);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = LadderConfig::from_toml("[search]\nmax_frontier = 64\n").unwrap();
        assert_eq!(config.search.effective_max_frontier(), Some(64));
        assert_eq!(config.dictionary, DictionaryConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = LadderConfig::from_toml("[search\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_toml_rejects_blank_path() {
        let err = LadderConfig::from_toml("[dictionary]\npath = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_override_replaces_dictionary_path() {
        let config = LadderConfig::default().with_overrides(|key| {
            (key == ENV_DICTIONARY).then(|| "/tmp/words.txt".to_string())
        });
        assert_eq!(config.dictionary.effective_path(), PathBuf::from("/tmp/words.txt"));
    }

    #[test]
    fn test_file_path_kept_without_override() {
        let config = LadderConfig::from_toml("[dictionary]\npath = \"words.txt\"\n")
            .unwrap()
            .with_overrides(|_| None);
        assert_eq!(config.dictionary.effective_path(), PathBuf::from("words.txt"));
    }

    #[test]
    fn test_load_reads_root_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[search]\nmax_frontier = 16\n",
        )
        .unwrap();
        let config = LadderConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.search.effective_max_frontier(), Some(16));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = LadderConfig::load(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
