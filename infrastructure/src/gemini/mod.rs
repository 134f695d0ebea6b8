//! Gemini provider adapter
//!
//! Talks to the `generateContent` REST endpoint with reqwest.

pub mod gateway;
pub mod types;

pub use gateway::{DEFAULT_BASE_URL, GeminiGateway};
