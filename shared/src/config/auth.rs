//! Session configuration

use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the serialized session identity
pub const SESSION_COOKIE_NAME: &str = "auth-user";

/// Session lifetime (24 hours)
pub const SESSION_MAX_AGE_SECONDS: i64 = 86_400;

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session cookie name
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session cookie path
    #[serde(default = "default_cookie_path")]
    pub cookie_path: String,

    /// Session lifetime in seconds
    #[serde(default = "default_max_age")]
    pub max_age: i64,

    /// Session cookie secure flag (HTTPS only)
    #[serde(default)]
    pub secure: bool,

    /// Secret used to sign session cookies as HS256 tokens.
    ///
    /// When absent the cookie holds the plain JSON identity, readable and
    /// writable by the browser.
    #[serde(default)]
    pub signing_secret: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_path: default_cookie_path(),
            max_age: default_max_age(),
            secure: false,
            signing_secret: None,
        }
    }
}

impl SessionConfig {
    /// Create a session configuration that signs cookies with `secret`
    pub fn signed(secret: impl Into<String>) -> Self {
        Self {
            signing_secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Whether session cookies are signed
    pub fn is_signed(&self) -> bool {
        self.signing_secret.is_some()
    }

    /// Apply `SESSION_SECRET` and `SESSION_SECURE_COOKIE` overrides
    pub fn apply_env(&mut self) {
        if let Ok(secret) = std::env::var("SESSION_SECRET") {
            if !secret.trim().is_empty() {
                self.signing_secret = Some(secret);
            }
        }
        if let Ok(secure) = std::env::var("SESSION_SECURE_COOKIE") {
            self.secure = secure.parse().unwrap_or(self.secure);
        }
    }
}

fn default_cookie_name() -> String {
    String::from(SESSION_COOKIE_NAME)
}

fn default_cookie_path() -> String {
    String::from("/")
}

fn default_max_age() -> i64 {
    SESSION_MAX_AGE_SECONDS
}
