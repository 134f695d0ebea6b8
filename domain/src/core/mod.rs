//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: identifier of the generative-text model
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
