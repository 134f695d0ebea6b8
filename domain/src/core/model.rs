//! Model identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Identifier of a generative-text model (Value Object)
///
/// Passed through to the provider verbatim, e.g. `gemini-1.5-flash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    /// Create a model identifier, rejecting blank names.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidModel(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self(DEFAULT_MODEL.to_string())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        assert_eq!(ModelId::default().as_str(), "gemini-1.5-flash");
    }

    #[test]
    fn test_model_trims_whitespace() {
        let model: ModelId = "  gemini-2.0-flash ".parse().unwrap();
        assert_eq!(model.to_string(), "gemini-2.0-flash");
    }

    #[test]
    fn test_blank_model_rejected() {
        assert!(matches!(
            ModelId::new("   "),
            Err(DomainError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_model_deserialize_rejects_empty() {
        let result: Result<ModelId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
