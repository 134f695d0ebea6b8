//! Completion request value objects.
//!
//! A [`CompletionRequest`] is derived per call from the session history and
//! is never stored. Generation and safety parameters are fixed.

use crate::core::model::ModelId;
use crate::prompt::THERAPIST_SYSTEM_INSTRUCTION;
use crate::session::entities::{Message, Role};
use serde::{Deserialize, Serialize};

/// Role vocabulary of the provider: assistant turns are called `model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    User,
    Model,
}

impl ProviderRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            ProviderRole::User => "user",
            ProviderRole::Model => "model",
        }
    }
}

impl From<Role> for ProviderRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => ProviderRole::User,
            Role::Assistant => ProviderRole::Model,
        }
    }
}

/// A prior turn as sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: ProviderRole,
    pub text: String,
}

impl From<&Message> for HistoryTurn {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.into(),
            text: message.content.clone(),
        }
    }
}

/// Sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub const FIXED: Self = Self {
        temperature: 0.7,
        max_output_tokens: 512,
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Harm category understood by the provider's moderation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    HarmCategoryHarassment,
    HarmCategoryHateSpeech,
}

impl HarmCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            HarmCategory::HarmCategoryHarassment => "HARM_CATEGORY_HARASSMENT",
            HarmCategory::HarmCategoryHateSpeech => "HARM_CATEGORY_HATE_SPEECH",
        }
    }
}

/// Block threshold for a harm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockMediumAndAbove,
}

impl HarmBlockThreshold {
    pub const fn as_str(self) -> &'static str {
        match self {
            HarmBlockThreshold::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
        }
    }
}

/// Category → threshold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Harassment and hate speech, both blocked at medium and above.
pub fn default_safety_settings() -> Vec<SafetySetting> {
    vec![
        SafetySetting {
            category: HarmCategory::HarmCategoryHarassment,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
        SafetySetting {
            category: HarmCategory::HarmCategoryHateSpeech,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
    ]
}

/// Everything the provider receives for one turn (Value Object)
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: ModelId,
    pub generation: GenerationConfig,
    pub safety: Vec<SafetySetting>,
    pub system_instruction: String,
    pub history: Vec<HistoryTurn>,
    pub user_text: String,
}

impl CompletionRequest {
    /// Build the request for `user_text` from the messages that precede it.
    ///
    /// `prior` must not contain the new user message; it is sent as the live
    /// turn instead.
    pub fn build(model: &ModelId, prior: &[Message], user_text: impl Into<String>) -> Self {
        Self {
            model: model.clone(),
            generation: GenerationConfig::FIXED,
            safety: default_safety_settings(),
            system_instruction: THERAPIST_SYSTEM_INSTRUCTION.to_string(),
            history: prior.iter().map(HistoryTurn::from).collect(),
            user_text: user_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::{GREETING, Session};

    #[test]
    fn test_build_maps_roles_to_provider_vocabulary() {
        let mut session = Session::seeded();
        session.add_user_message("I had a rough day").unwrap();
        session.add_assistant_message("Tell me more.");

        let request = CompletionRequest::build(&ModelId::default(), session.messages(), "Work.");

        assert_eq!(request.history.len(), 3);
        assert_eq!(request.history[0].role, ProviderRole::Model);
        assert_eq!(request.history[0].text, GREETING);
        assert_eq!(request.history[1].role, ProviderRole::User);
        assert_eq!(request.history[2].role, ProviderRole::Model);
        assert_eq!(request.user_text, "Work.");
    }

    #[test]
    fn test_build_uses_fixed_parameters() {
        let request = CompletionRequest::build(&ModelId::default(), &[], "Hello");

        assert_eq!(request.generation.temperature, 0.7);
        assert_eq!(request.generation.max_output_tokens, 512);
        assert_eq!(request.system_instruction, THERAPIST_SYSTEM_INSTRUCTION);
        assert_eq!(request.safety.len(), 2);
        assert!(
            request
                .safety
                .iter()
                .all(|s| s.threshold == HarmBlockThreshold::BlockMediumAndAbove)
        );
        assert_eq!(request.safety[0].category.as_str(), "HARM_CATEGORY_HARASSMENT");
        assert_eq!(request.safety[1].category.as_str(), "HARM_CATEGORY_HATE_SPEECH");
    }

    #[test]
    fn test_provider_role_serialization() {
        assert_eq!(serde_json::to_string(&ProviderRole::Model).unwrap(), "\"model\"");
        assert_eq!(
            serde_json::to_string(&HarmBlockThreshold::BlockMediumAndAbove).unwrap(),
            "\"BLOCK_MEDIUM_AND_ABOVE\""
        );
    }
}
