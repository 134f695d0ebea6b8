//! Gemini completion gateway implementation

use super::types::{GenerateContentRequest, GenerateContentResponse, map_http_error};
use async_trait::async_trait;
use reflct_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use reflct_domain::CompletionRequest;
use tracing::{debug, info};

/// Public Generative Language API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Completion gateway backed by the Gemini REST API
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiGateway {
    /// Create a gateway against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, GatewayError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::MissingCredential(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("reflct/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("GeminiGateway initialized");

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the gateway at a different host (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/v1beta/models/{model}:generateContent`
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        )
    }
}

#[async_trait]
impl CompletionGateway for GeminiGateway {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let url = self.endpoint(request.model.as_str());
        let body = GenerateContentRequest::from(request);

        debug!(
            model = %request.model,
            turns = body.contents.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            return Err(map_http_error(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let reply = parsed.into_text()?;
        debug!(bytes = reply.len(), "Received generateContent reply");
        Ok(reply)
    }
}
