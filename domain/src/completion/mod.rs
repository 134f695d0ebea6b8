//! Completion domain: one request/response cycle with the generative-text provider.
//!
//! - [`request::CompletionRequest`]: everything the provider needs for one turn
//! - [`request::GenerationConfig`] / [`request::SafetySetting`]: fixed call parameters

pub mod request;

/// Reply used whenever the provider call fails.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I had trouble processing that. Would you like to try sharing that again?";
