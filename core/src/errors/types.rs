//! Domain-specific error types for authentication and input validation

use thiserror::Error;

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    SessionRequired,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Resource belongs to another user")]
    NotResourceOwner,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Time slot not offered: {slot}")]
    InvalidTimeSlot { slot: String },

    #[error("Invalid status change: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },
}
