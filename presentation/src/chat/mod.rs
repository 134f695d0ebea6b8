//! Interactive chat module
//!
//! Provides a readline-based chat interface over a persisted session.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
