//! Infrastructure layer for reflct
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod random;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig, FileStorageConfig,
};
pub use gemini::GeminiGateway;
pub use logging::JsonlConversationLogger;
pub use random::StdRandomSource;
pub use storage::{FileKeyValueStorage, MemoryKeyValueStorage};
