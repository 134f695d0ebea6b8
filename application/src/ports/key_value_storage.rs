//! Key-value storage port
//!
//! Persistent string values addressed by key. The session store keeps the
//! whole serialized conversation under a single key.

use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous persistent key-value area.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
