//! File-backed key-value storage
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a sibling temp file
//! which is synced and then renamed over the target, so a crash never leaves
//! a half-written value behind.

use reflct_application::ports::key_value_storage::{KeyValueStorage, StorageError};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

const VALUE_EXTENSION: &str = "json";

pub struct FileKeyValueStorage {
    dir: PathBuf,
    // Serializes writers within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// `<data_dir>/reflct`, or `None` when the platform has no data dir.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("reflct"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!(".{}.{}.tmp", key, std::process::id()))
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key is empty".to_string()));
    }
    let allowed = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !allowed || key.starts_with('.') {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        fs::create_dir_all(&self.dir)?;

        let tmp_path = self.temp_path_for(key);
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }
}
