//! Shared utilities and common types for the Rentify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Common response wrappers

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LoggingConfig,
    ServerConfig, CorsConfig, SessionConfig, StoreBackend, StoreConfig
};
pub use errors::{ErrorResponse, ApiResult, error_codes};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
