//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Session cookie and signing configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `store` - REST resource store connection

pub mod auth;
pub mod environment;
pub mod server;
pub mod store;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::SessionConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use store::{StoreBackend, StoreConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Resource store configuration
    pub store: StoreConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            session: SessionConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 8080),
            store: StoreConfig::default(),
            session: SessionConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            store: StoreConfig::default(),
            session: SessionConfig {
                secure: true,
                ..Default::default()
            },
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// Starts from the preset for the detected environment and then applies
    /// the individual overrides (`SERVER_*`, `STORE_*`, `SESSION_*`, CORS).
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        config.server.apply_env();
        config.store.apply_env();
        config.session.apply_env();
        config.cors.apply_env();
        config
    }
}
