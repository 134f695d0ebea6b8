//! Domain layer for reflct
//!
//! This crate contains the core entities, value objects and pure logic of the
//! therapist chat. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Session**: one context's ordered chat history, seeded with a greeting
//! - **Completion**: one request/response cycle with the generative-text provider
//! - **Enrichment**: supportive content appended to a model reply

pub mod completion;
pub mod core;
pub mod enrichment;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use completion::{
    FALLBACK_REPLY,
    request::{
        CompletionRequest, GenerationConfig, HarmBlockThreshold, HarmCategory, HistoryTurn,
        ProviderRole, SafetySetting,
    },
};
pub use crate::core::{error::DomainError, model::ModelId};
pub use enrichment::{Enrichment, FixedRandom, RandomSource, ReplyEnricher};
pub use prompt::THERAPIST_SYSTEM_INSTRUCTION;
pub use session::entities::{GREETING, Message, Role, Session};
