//! Application layer for reflct
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    key_value_storage::{KeyValueStorage, StorageError},
};
pub use use_cases::complete::CompletionClient;
pub use use_cases::send_message::{SendMessageError, SendMessageOutput, SendMessageUseCase};
pub use use_cases::session_store::{DEFAULT_STORAGE_KEY, SessionStore};
