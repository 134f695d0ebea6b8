//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Every section uses
//! `#[serde(default)]` so partial files merge cleanly over the defaults.

mod logging;
mod output;
mod provider;
mod repl;
mod storage;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use provider::{DEFAULT_API_KEY_ENV, FileProviderConfig};
pub use repl::FileReplConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems detected in a loaded configuration
///
/// These are reported as warnings; the affected setting falls back to its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("storage.key cannot be empty")]
    EmptyStorageKey,

    #[error("storage.key '{0}' may only contain letters, digits, '-', '_' and '.'")]
    InvalidStorageKey(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generative-text provider settings
    pub provider: FileProviderConfig,
    /// Session persistence
    pub storage: FileStorageConfig,
    /// Diagnostic and transcript logging
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every issue found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Err(e) = self.provider.parse_model() {
            issues.push(e);
        }
        if self.provider.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        if let Err(e) = self.storage.validate_key() {
            issues.push(e);
        }

        issues
    }
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(path: &str) -> std::path::PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => std::path::PathBuf::from(path),
        },
        None => std::path::PathBuf::from(path),
    }
}
