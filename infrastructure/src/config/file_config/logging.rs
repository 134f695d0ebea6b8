//! Logging configuration from TOML (`[logging]` section)

use super::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript path; transcript logging is off when unset
    pub conversation_log: Option<String>,
    /// Directory for daily rolling diagnostic logs
    pub log_dir: Option<String>,
}

impl FileLoggingConfig {
    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        self.conversation_log.as_deref().map(expand_home)
    }

    pub fn log_dir_path(&self) -> Option<PathBuf> {
        self.log_dir.as_deref().map(expand_home)
    }
}
