//! Cookie value encoding for session identities.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::User;
use crate::errors::{DomainError, DomainResult};

/// Claims of a signed session cookie
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    user: User,
    iat: i64,
    exp: i64,
}

/// How identities are written into the session cookie.
///
/// `Plain` stores the identity as JSON, the format the browser client writes
/// itself; anyone holding the cookie can edit it. `Signed`
/// stores an HS256 token whose `exp` bounds the session lifetime.
#[derive(Clone)]
pub enum SessionCodec {
    Plain,
    Signed { secret: String, max_age: i64 },
}

impl SessionCodec {
    pub fn signed(secret: impl Into<String>, max_age: i64) -> Self {
        SessionCodec::Signed {
            secret: secret.into(),
            max_age,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, SessionCodec::Signed { .. })
    }

    /// Encodes an identity as a cookie value
    pub fn encode(&self, user: &User) -> DomainResult<String> {
        match self {
            SessionCodec::Plain => serde_json::to_string(user).map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize session: {}", e),
            }),
            SessionCodec::Signed { secret, max_age } => {
                let now = Utc::now().timestamp();
                let claims = SessionClaims {
                    user: user.clone(),
                    iat: now,
                    exp: now + max_age,
                };
                encode(
                    &Header::new(Algorithm::HS256),
                    &claims,
                    &EncodingKey::from_secret(secret.as_bytes()),
                )
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to sign session: {}", e),
                })
            }
        }
    }

    /// Decodes a cookie value.
    ///
    /// Anything that is not a well-formed identity, carries a bad signature or
    /// has expired decodes to `None`.
    pub fn decode(&self, raw: &str) -> Option<User> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match self {
            SessionCodec::Plain => match serde_json::from_str::<User>(raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    debug!("Discarding malformed session cookie: {}", e);
                    None
                }
            },
            SessionCodec::Signed { secret, .. } => {
                let mut validation = Validation::new(Algorithm::HS256);
                validation.validate_exp = true;
                validation.leeway = 0;

                match decode::<SessionClaims>(raw, &DecodingKey::from_secret(secret.as_bytes()), &validation) {
                    Ok(data) => Some(data.claims.user),
                    Err(e) => {
                        debug!("Discarding invalid signed session: {}", e);
                        None
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionCodec::Plain => f.write_str("SessionCodec::Plain"),
            SessionCodec::Signed { max_age, .. } => f
                .debug_struct("SessionCodec::Signed")
                .field("secret", &"<redacted>")
                .field("max_age", max_age)
                .finish(),
        }
    }
}
