//! Provider configuration from TOML (`[provider]` section)

use super::ConfigValidationError;
use reflct_domain::ModelId;
use reflct_domain::core::model::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};

/// Environment variable holding the Gemini API key unless configured.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Raw provider configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model identifier sent to the provider
    pub model: String,
    /// Override for the API host (proxies, local gateways)
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl FileProviderConfig {
    pub fn parse_model(&self) -> Result<ModelId, ConfigValidationError> {
        ModelId::new(&self.model).map_err(|_| ConfigValidationError::EmptyModelName)
    }

    /// Inline key if set, otherwise the value of `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(self.api_key_env.trim()))
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("inline".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("inline"));
    }

    #[test]
    fn test_env_key_used_when_no_inline_key() {
        let config = FileProviderConfig::default();
        let key = config.resolve_api_key_with(|name| {
            assert_eq!(name, "GEMINI_API_KEY");
            Some(" secret \n".to_string())
        });
        assert_eq!(key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_keys_are_missing() {
        let config = FileProviderConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_api_key_with(|_| Some(String::new())).is_none());
        assert!(config.resolve_api_key_with(|_| None).is_none());
    }

    #[test]
    fn test_blank_model_rejected() {
        let config = FileProviderConfig {
            model: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.parse_model(),
            Err(ConfigValidationError::EmptyModelName)
        );
    }
}
