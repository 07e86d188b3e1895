//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,  // Use all CPU cores
            keep_alive: default_keep_alive(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS` overrides.
    /// Unparsable values keep the current setting.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()) {
            self.port = port;
        }
        if let Some(workers) = std::env::var("SERVER_WORKERS").ok().and_then(|v| v.parse().ok()) {
            self.workers = workers;
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            max_age: default_max_age(),
        }
    }

    /// Whether any origin is accepted
    pub fn allow_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Apply `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE` overrides
    pub fn apply_env(&mut self) {
        if let Ok(origins) = std::env::var("ALLOWED_ORIGINS") {
            self.allowed_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(max_age) = std::env::var("CORS_MAX_AGE").ok().and_then(|v| v.parse().ok()) {
            self.max_age = max_age;
        }
    }
}

fn default_keep_alive() -> u64 {
    75  // 75 seconds
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("127.0.0.1", 3000);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.keep_alive, 75);
    }

    #[test]
    fn test_cors_any_origin() {
        assert!(CorsConfig::development().allow_any_origin());

        let config = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        assert!(!config.allow_any_origin());
    }
}
