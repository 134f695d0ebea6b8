//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod complete;
pub mod send_message;
pub mod session_store;
