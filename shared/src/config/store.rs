//! REST resource store configuration

use serde::{Deserialize, Serialize};

/// Which backend serves the user, property and appointment collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Remote json-server style REST store
    Rest,
    /// In-process store seeded with demo data
    Memory,
}

impl Default for StoreBackend {
    fn default() -> Self {
        StoreBackend::Rest
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rest" | "http" => Ok(StoreBackend::Rest),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

/// Resource store connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Store backend
    #[serde(default)]
    pub backend: StoreBackend,

    /// Base URL of the REST store, without trailing slash
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            base_url: String::from("http://localhost:3001"),
            timeout_secs: default_timeout(),
        }
    }
}

impl StoreConfig {
    /// Create a REST store configuration for `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Apply `STORE_BACKEND`, `STORE_URL` and `STORE_TIMEOUT_SECS` overrides
    pub fn apply_env(&mut self) {
        if let Some(backend) = std::env::var("STORE_BACKEND").ok().and_then(|v| v.parse().ok()) {
            self.backend = backend;
        }
        if let Ok(url) = std::env::var("STORE_URL") {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = std::env::var("STORE_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()) {
            self.timeout_secs = timeout;
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_from_str() {
        assert_eq!("rest".parse::<StoreBackend>().unwrap(), StoreBackend::Rest);
        assert_eq!("Memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = StoreConfig::new("http://store:3001/");
        assert_eq!(config.base_url, "http://store:3001");
        assert_eq!(config.backend, StoreBackend::Rest);
        assert_eq!(config.timeout_secs, 10);
    }
}
