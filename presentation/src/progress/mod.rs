//! Progress indicators

pub mod typing;

pub use typing::TypingIndicator;
