//! Per-request session state backed by a browser cookie.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rf_shared::SessionConfig;
use serde::Serialize;
use tracing::debug;

use super::codec::SessionCodec;
use crate::domain::entities::User;
use crate::errors::DomainResult;

/// A cookie the HTTP layer must write back to the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    /// Lifetime in seconds; zero removes the cookie
    pub max_age: i64,
    pub secure: bool,
    /// Set for signed sessions only; plain sessions stay readable by page scripts
    pub http_only: bool,
    /// Absolute expiry; the Unix epoch for removals
    pub expires: DateTime<Utc>,
}

impl SessionCookie {
    pub fn is_removal(&self) -> bool {
        self.max_age == 0
    }
}

/// Holds the signed-in identity for one request.
///
/// A store is built once from configuration and then [`restore`]d for every
/// request from the raw cookie value. `login` and `logout` update the active
/// identity and hand back the cookie to send.
///
/// [`restore`]: SessionStore::restore
#[derive(Debug, Clone)]
pub struct SessionStore {
    codec: SessionCodec,
    cookie_name: String,
    cookie_path: String,
    max_age: i64,
    secure: bool,
    active: Option<User>,
}

impl SessionStore {
    /// Creates an empty store from configuration
    pub fn new(config: &SessionConfig) -> Self {
        let codec = match &config.signing_secret {
            Some(secret) => SessionCodec::signed(secret.clone(), config.max_age),
            None => SessionCodec::Plain,
        };

        Self {
            codec,
            cookie_name: config.cookie_name.clone(),
            cookie_path: config.cookie_path.clone(),
            max_age: config.max_age,
            secure: config.secure,
            active: None,
        }
    }

    /// Copy of this store holding whatever identity `raw` decodes to
    pub fn restore(&self, raw: Option<&str>) -> Self {
        let active = raw.and_then(|value| self.codec.decode(value));
        if raw.is_some() && active.is_none() {
            debug!("Session cookie present but unusable, treating request as signed out");
        }

        Self {
            active,
            ..self.clone()
        }
    }

    /// Name of the cookie carrying the session
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn is_signed(&self) -> bool {
        self.codec.is_signed()
    }

    /// The signed-in identity, if any
    pub fn current(&self) -> Option<&User> {
        self.active.as_ref()
    }

    /// Makes `user` the active identity and returns the cookie persisting it
    pub fn login(&mut self, user: User) -> DomainResult<SessionCookie> {
        let value = self.codec.encode(&user)?;
        debug!(user_id = user.id, role = %user.role, "Session started");
        self.active = Some(user);

        Ok(SessionCookie {
            name: self.cookie_name.clone(),
            value,
            path: self.cookie_path.clone(),
            max_age: self.max_age,
            secure: self.secure,
            http_only: self.codec.is_signed(),
            expires: Utc::now() + Duration::seconds(self.max_age),
        })
    }

    /// Clears the active identity and returns a cookie that removes it
    pub fn logout(&mut self) -> SessionCookie {
        self.active = None;

        SessionCookie {
            name: self.cookie_name.clone(),
            value: String::new(),
            path: self.cookie_path.clone(),
            max_age: 0,
            secure: self.secure,
            http_only: self.codec.is_signed(),
            expires: Utc.timestamp_opt(0, 0).single().unwrap_or_default(),
        }
    }
}
