//! Mapping of domain failures onto HTTP responses.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use rf_core::errors::{AuthError, DomainError, ValidationError};
use rf_shared::{error_codes, ErrorResponse};
use std::collections::BTreeMap;
use thiserror::Error;

/// Error returned by API handlers and extractors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request data")]
    InvalidRequest(#[from] validator::ValidationErrors),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => status_for(error),
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::InvalidRequest(errors) => handle_validation_errors(errors),
        }
    }
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials)
        | DomainError::Auth(AuthError::SessionRequired) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::InsufficientPermissions)
        | DomainError::Auth(AuthError::NotResourceOwner) => StatusCode::FORBIDDEN,
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Store { .. } => StatusCode::BAD_GATEWAY,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a domain error to a JSON error response.
///
/// Store and internal failures are logged and answered with a generic
/// message; everything else carries the error's own message.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    let body = match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            ErrorResponse::new(error_codes::INVALID_CREDENTIALS, error.to_string())
        }
        DomainError::Auth(AuthError::SessionRequired) => {
            ErrorResponse::new(error_codes::UNAUTHORIZED, error.to_string())
        }
        DomainError::Auth(_) => ErrorResponse::new(error_codes::FORBIDDEN, error.to_string()),
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
        }
        DomainError::ValidationErr(validation) => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, validation.to_string())
        }
        DomainError::NotFound { resource } => {
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource))
        }
        DomainError::Store { message } => {
            log::error!("Resource store failure: {}", message);
            ErrorResponse::new(
                error_codes::STORE_UNAVAILABLE,
                "The resource store could not be reached",
            )
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
    };

    HttpResponse::build(status).json(body)
}

/// 400 response listing the failed fields of a request body
pub fn handle_validation_errors(errors: &validator::ValidationErrors) -> HttpResponse {
    let fields: BTreeMap<&str, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field, messages)
        })
        .collect();

    log::debug!("Request validation failed: {:?}", fields);

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields),
    )
}
