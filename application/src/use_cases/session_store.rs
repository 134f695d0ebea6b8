//! Session store.
//!
//! Loads and saves the whole conversation under a single storage key. Reads
//! never fail: missing, unreadable or malformed data yields a fresh seeded
//! session.

use crate::ports::key_value_storage::{KeyValueStorage, StorageError};
use reflct_domain::{Message, Session};
use std::sync::Arc;
use tracing::debug;

/// Storage key holding the serialized conversation.
pub const DEFAULT_STORAGE_KEY: &str = "therapistChatHistory";

/// Loads and persists the conversation [`Session`].
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Restore the persisted session, or a seeded one if there is none.
    ///
    /// Parse failures are swallowed; they are visible only at debug level.
    pub fn load(&self) -> Session {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored session, starting fresh");
                return Session::seeded();
            }
            Err(e) => {
                debug!(key = %self.key, error = %e, "Stored session unreadable, starting fresh");
                return Session::seeded();
            }
        };

        match serde_json::from_str::<Vec<Message>>(&raw) {
            Ok(messages) if !messages.is_empty() => {
                debug!(key = %self.key, messages = messages.len(), "Restored session");
                Session::from_messages(messages)
            }
            Ok(_) => {
                debug!(key = %self.key, "Stored session is empty, starting fresh");
                Session::seeded()
            }
            Err(e) => {
                debug!(key = %self.key, error = %e, "Stored session malformed, starting fresh");
                Session::seeded()
            }
        }
    }

    /// Overwrite the persisted value with the full session.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session)?;
        self.storage.set(&self.key, &raw)
    }
}
