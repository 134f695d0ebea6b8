//! Completion client.
//!
//! Wraps one provider call: builds the [`CompletionRequest`] from the prior
//! session history, sends it through the [`CompletionGateway`] and trims the
//! reply.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use reflct_domain::util::preview;
use reflct_domain::{CompletionRequest, FALLBACK_REPLY, ModelId, Session};
use std::sync::Arc;
use tracing::{debug, warn};

/// Issues completion requests for a fixed model.
#[derive(Clone)]
pub struct CompletionClient {
    gateway: Arc<dyn CompletionGateway>,
    model: ModelId,
}

impl CompletionClient {
    pub fn new(gateway: Arc<dyn CompletionGateway>, model: ModelId) -> Self {
        Self { gateway, model }
    }

    pub fn model(&self) -> &ModelId {
        &self.model
    }

    /// Request a reply to `user_text`, given the messages stored so far.
    ///
    /// `session` must not yet contain `user_text`. Returns the trimmed reply;
    /// a blank reply counts as a failure.
    pub async fn try_complete(
        &self,
        session: &Session,
        user_text: &str,
    ) -> Result<String, GatewayError> {
        let request = self.request_for(session, user_text);
        self.send_request(&request).await
    }

    /// Like [`try_complete`](Self::try_complete), but never fails: any error
    /// becomes the fixed apology.
    pub async fn complete(&self, session: &Session, user_text: &str) -> String {
        match self.try_complete(session, user_text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(model = %self.model, error = %e, "Completion failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Build the request for `user_text` from the messages of `session`.
    pub fn request_for(&self, session: &Session, user_text: &str) -> CompletionRequest {
        CompletionRequest::build(&self.model, session.messages(), user_text)
    }

    /// Send a prepared request and return the trimmed reply.
    pub async fn send_request(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        debug!(
            model = %self.model,
            history = request.history.len(),
            "Sending completion request: {}",
            preview(&request.user_text, 60)
        );

        let raw = self.gateway.generate(request).await?;
        let reply = raw.trim();
        if reply.is_empty() {
            return Err(GatewayError::InvalidResponse(
                "provider returned an empty reply".to_string(),
            ));
        }

        debug!(model = %self.model, bytes = reply.len(), "Completion received");
        Ok(reply.to_string())
    }
}
