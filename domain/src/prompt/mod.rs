//! Prompt domain
//!
//! The persona the model is instructed to take on.

mod therapist;

pub use therapist::THERAPIST_SYSTEM_INSTRUCTION;
