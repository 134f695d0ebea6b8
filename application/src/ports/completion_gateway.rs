//! Completion Gateway port
//!
//! Defines the interface for calling a generative-text provider.

use async_trait::async_trait;
use reflct_domain::CompletionRequest;
use thiserror::Error;

/// Errors that can occur while talking to the provider
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Response blocked by provider: {0}")]
    Blocked(String),

    #[error("Missing API credential: {0}")]
    MissingCredential(String),
}

/// Gateway for generative-text completions
///
/// One call is one independent request/response cycle; the gateway keeps no
/// conversation state of its own. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send the request and return the raw (untrimmed) reply text.
    async fn generate(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
