//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Resource store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for a missing resource, e.g. `not_found("Property 7")`
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
