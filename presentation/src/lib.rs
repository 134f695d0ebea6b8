//! Presentation layer for reflct
//!
//! This crate contains the CLI definition, the chat REPL, transcript
//! formatting and the typing indicator.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::TypingIndicator;
