//! Conversation session domain.
//!
//! - [`entities::Session`]: the ordered chat history of one context
//! - [`entities::Message`]: a single message within a session

pub mod entities;
