//! Send Message use case.
//!
//! The conversation session manager: appends the user's message, asks the
//! provider for a reply, enriches it and appends the reply, persisting the
//! session after every append.
//!
//! Failures never surface as errors once the message is accepted: a failed
//! provider call becomes the fixed apology and a failed save is logged.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::complete::CompletionClient;
use crate::use_cases::session_store::SessionStore;
use reflct_domain::enrichment::compose;
use reflct_domain::util::preview;
use reflct_domain::{DomainError, Enrichment, FALLBACK_REPLY, RandomSource, ReplyEnricher, Session};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::{info, warn};

/// Reasons a submission is not accepted.
#[derive(Error, Debug)]
pub enum SendMessageError {
    #[error("A reply is still in progress")]
    Busy,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageOutput {
    /// Text appended to the session as the assistant message.
    pub reply: String,
    /// Blocks appended to the model reply.
    pub enrichments: Vec<Enrichment>,
    /// Whether the provider failed and the apology was used instead.
    pub fallback: bool,
}

/// Clears the busy flag when dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Use case for submitting a user message to the virtual therapist.
pub struct SendMessageUseCase {
    client: CompletionClient,
    store: SessionStore,
    enricher: ReplyEnricher,
    random: Mutex<Box<dyn RandomSource>>,
    busy: Arc<AtomicBool>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SendMessageUseCase {
    pub fn new(
        client: CompletionClient,
        store: SessionStore,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            client,
            store,
            enricher: ReplyEnricher::default(),
            random: Mutex::new(random),
            busy: Arc::new(AtomicBool::new(false)),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Whether a provider call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Shared handle to the busy flag, for views that poll it.
    pub fn busy_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.busy)
    }

    pub fn model(&self) -> &reflct_domain::ModelId {
        self.client.model()
    }

    /// Restore the persisted session (or a fresh seeded one).
    pub fn load_session(&self) -> Session {
        let session = self.store.load();
        self.conversation_logger
            .log(ConversationEvent::session_loaded(session.len()));
        session
    }

    /// Submit `text` and append the reply to `session`.
    ///
    /// Rejected without touching `session` when `text` is blank or another
    /// submission is still in flight.
    pub async fn execute(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<SendMessageOutput, SendMessageError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }
        let _busy = BusyGuard::acquire(&self.busy).ok_or(SendMessageError::Busy)?;

        info!("User message: {}", preview(text, 80));

        let request = self.client.request_for(session, text);
        session.add_user_message(text)?;
        self.persist(session);
        self.conversation_logger
            .log(ConversationEvent::user_message(text));

        let output = match self.client.send_request(&request).await {
            Ok(reply) => {
                let enrichments = {
                    let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
                    self.enricher.select(text, &mut **random)
                };
                let reply = compose(&reply, &enrichments);
                self.conversation_logger.log(ConversationEvent::assistant_reply(
                    self.client.model().as_str(),
                    &reply,
                    enrichments.len(),
                ));
                SendMessageOutput {
                    reply,
                    enrichments,
                    fallback: false,
                }
            }
            Err(e) => {
                warn!(
                    model = %self.client.model(),
                    error = %e,
                    "Completion failed, replying with apology"
                );
                self.conversation_logger.log(ConversationEvent::completion_failed(
                    self.client.model().as_str(),
                    &e.to_string(),
                ));
                SendMessageOutput {
                    reply: FALLBACK_REPLY.to_string(),
                    enrichments: Vec::new(),
                    fallback: true,
                }
            }
        };

        session.add_assistant_message(output.reply.clone());
        self.persist(session);

        Ok(output)
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.store.save(session) {
            warn!(key = %self.store.key(), error = %e, "Failed to persist session");
        }
    }
}
