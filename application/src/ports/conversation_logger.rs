//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording the chat transcript
//! (user messages, replies, enrichments, provider failures) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! conversation itself in a machine-readable format (JSONL).

use serde_json::{Value, json};

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "user_message", "assistant_reply").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn session_loaded(messages: usize) -> Self {
        Self::new("session_loaded", json!({ "messages": messages }))
    }

    pub fn user_message(text: &str) -> Self {
        Self::new("user_message", json!({ "text": text }))
    }

    pub fn assistant_reply(model: &str, text: &str, enrichments: usize) -> Self {
        Self::new(
            "assistant_reply",
            json!({
                "model": model,
                "bytes": text.len(),
                "enrichments": enrichments,
                "text": text,
            }),
        )
    }

    pub fn completion_failed(model: &str, error: &str) -> Self {
        Self::new(
            "completion_failed",
            json!({ "model": model, "error": error }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; implementations drop records they
/// cannot write.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
