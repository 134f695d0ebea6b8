//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid model identifier: {0}")]
    InvalidModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_display() {
        assert_eq!(DomainError::EmptyMessage.to_string(), "Message cannot be empty");
    }

    #[test]
    fn test_invalid_role_display() {
        let error = DomainError::InvalidRole("system".to_string());
        assert_eq!(error.to_string(), "Invalid role: system");
    }
}
