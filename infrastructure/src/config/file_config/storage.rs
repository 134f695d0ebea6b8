//! Storage configuration from TOML (`[storage]` section)

use super::{ConfigValidationError, expand_home};
use reflct_application::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding stored sessions (default: `<data_dir>/reflct`)
    pub dir: Option<String>,
    /// Key the session is stored under
    pub key: String,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl FileStorageConfig {
    /// Configured directory with `~` expanded, if any.
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        self.dir
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(expand_home)
    }

    pub fn validate_key(&self) -> Result<(), ConfigValidationError> {
        if self.key.trim().is_empty() {
            return Err(ConfigValidationError::EmptyStorageKey);
        }
        let valid = !self.key.starts_with('.')
            && self
                .key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(ConfigValidationError::InvalidStorageKey(self.key.clone()));
        }
        Ok(())
    }

    /// Configured key, or the default when it fails validation.
    pub fn effective_key(&self) -> &str {
        if self.validate_key().is_ok() {
            &self.key
        } else {
            DEFAULT_STORAGE_KEY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_falls_back_to_default() {
        let config = FileStorageConfig {
            key: "a/b".to_string(),
            ..Default::default()
        };
        assert_eq!(config.effective_key(), DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_blank_dir_is_unset() {
        let config = FileStorageConfig {
            dir: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_dir().is_none());
    }
}
