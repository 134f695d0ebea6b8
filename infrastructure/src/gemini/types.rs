//! Wire types for the Gemini `generateContent` REST API
//!
//! Converts domain [`CompletionRequest`]s into request bodies and extracts
//! reply text (or a typed failure) from response bodies.

use reflct_application::GatewayError;
use reflct_domain::{CompletionRequest, HistoryTurn, ProviderRole};
use serde::{Deserialize, Serialize};

/// Finish reasons that mean the candidate was withheld.
const BLOCKING_FINISH_REASONS: [&str; 5] = [
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

// ─── Domain → Gemini ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

impl From<&CompletionRequest> for GenerateContentRequest {
    /// Prior turns first, then the live user turn.
    fn from(request: &CompletionRequest) -> Self {
        let mut contents: Vec<Content> = request.history.iter().map(history_content).collect();
        contents.push(Content::text(ProviderRole::User.as_str(), &request.user_text));

        Self {
            contents,
            system_instruction: Content::text("system", &request.system_instruction),
            generation_config: GenerationConfig {
                temperature: request.generation.temperature,
                max_output_tokens: request.generation.max_output_tokens,
            },
            safety_settings: request
                .safety
                .iter()
                .map(|s| SafetySetting {
                    category: s.category.as_str(),
                    threshold: s.threshold.as_str(),
                })
                .collect(),
        }
    }
}

fn history_content(turn: &HistoryTurn) -> Content {
    Content::text(turn.role.as_str(), &turn.text)
}

// ─── Gemini → Domain ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn into_text(self) -> Result<String, GatewayError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GatewayError::Blocked(format!("prompt blocked: {}", reason)));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("no candidates in response".to_string()))?;

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BLOCKING_FINISH_REASONS.contains(&reason) {
                return Err(GatewayError::Blocked(format!(
                    "candidate finished with {}",
                    reason
                )));
            }
        }

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GatewayError::InvalidResponse(
                "candidate contained no text".to_string(),
            ));
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Map a non-success HTTP response to a gateway error.
pub fn map_http_error(status: u16, body: &str) -> GatewayError {
    let detail = serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .map(|wrapper| {
            let message = wrapper.error.message.unwrap_or_default();
            match wrapper.error.status {
                Some(status_text) if !status_text.is_empty() => {
                    format!("{}: {}", status_text, message)
                }
                _ => message,
            }
        })
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    GatewayError::RequestFailed(format!("HTTP {}: {}", status, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflct_domain::{ModelId, Session, THERAPIST_SYSTEM_INSTRUCTION};

    fn request() -> CompletionRequest {
        let mut session = Session::seeded();
        session.add_user_message("I feel anxious").unwrap();
        session.add_assistant_message("What is on your mind?");
        CompletionRequest::build(&ModelId::default(), session.messages(), "Work deadlines")
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from(&request())).unwrap();

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[1]["role"], "user");
        assert_eq!(contents[1]["parts"][0]["text"], "I feel anxious");
        assert_eq!(contents[2]["role"], "model");
        assert_eq!(contents[3]["role"], "user");
        assert_eq!(contents[3]["parts"][0]["text"], "Work deadlines");

        assert_eq!(body["systemInstruction"]["role"], "system");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            THERAPIST_SYSTEM_INSTRUCTION
        );

        assert_eq!(body["generationConfig"]["maxOutputTokens"], 512);
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);

        assert_eq!(
            body["safetySettings"],
            serde_json::json!([
                {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                {"category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE"}
            ])
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello, "},{"text":"friend. "}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "Hello, friend. ");
    }

    #[test]
    fn test_blocked_prompt() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(matches!(response.into_text(), Err(GatewayError::Blocked(_))));
    }

    #[test]
    fn test_blocked_candidate() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(matches!(response.into_text(), Err(GatewayError::Blocked(_))));
    }

    #[test]
    fn test_empty_candidates_is_invalid() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_text(),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_map_http_error_uses_provider_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let error = map_http_error(400, body);
        assert_eq!(
            error.to_string(),
            "Request failed: HTTP 400: INVALID_ARGUMENT: API key not valid."
        );
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let error = map_http_error(503, "upstream unavailable\n");
        assert_eq!(
            error.to_string(),
            "Request failed: HTTP 503: upstream unavailable"
        );
    }
}
