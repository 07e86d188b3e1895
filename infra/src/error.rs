//! Infrastructure-specific error types

use rf_core::errors::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Transport failure, timeout or undecodable body
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("Store responded {status} for {url}")]
    Status { status: u16, url: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InfrastructureError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, InfrastructureError::Status { status: 404, .. })
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Status { status: 404, url } => DomainError::NotFound {
                resource: resource_path(&url),
            },
            other => DomainError::Store {
                message: other.to_string(),
            },
        }
    }
}

/// The store-relative part of a request URL, `users/9` for
/// `http://localhost:3001/users/9`
fn resource_path(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .map(|parsed| parsed.path().trim_matches('/').to_string())
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| "Resource".to_string())
}
