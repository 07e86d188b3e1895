//! Session extractors and cookie conversion.
//!
//! Handlers never decode the cookie themselves: the route gate leaves the
//! restored [`SessionStore`] in the request extensions and these extractors
//! read it back.

use actix_web::{
    cookie::{
        time::{Duration, OffsetDateTime},
        Cookie, SameSite,
    },
    dev::Payload,
    error::ErrorInternalServerError,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use rf_core::errors::AuthError;
use rf_core::{SessionCookie, SessionStore, User};
use std::future::{ready, Ready};

use crate::handlers::ApiError;

/// The request's session store, for handlers that sign in or out
pub struct Session(pub SessionStore);

impl Session {
    pub fn user(&self) -> Option<&User> {
        self.0.current()
    }
}

impl FromRequest for Session {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionStore>()
            .cloned()
            .map(Session)
            .ok_or_else(|| {
                log::error!("Session requested but the route gate is not installed");
                ErrorInternalServerError("Session unavailable")
            });

        ready(result)
    }
}

/// Extractor for a required signed-in identity; answers 401 without one
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionStore>()
            .and_then(|store| store.current().cloned())
            .map(CurrentUser)
            .ok_or_else(|| ApiError::from(AuthError::SessionRequired));

        ready(result)
    }
}

/// Extractor for an optional signed-in identity
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<User>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<SessionStore>()
            .and_then(|store| store.current().cloned());
        ready(Ok(OptionalUser(user)))
    }
}

/// Builds the `Set-Cookie` value for a session cookie.
///
/// Session cookies are `SameSite=Lax`, and `HttpOnly` when signed; removals
/// carry `Max-Age=0` and an expiry at the Unix epoch.
pub fn to_cookie(session_cookie: &SessionCookie) -> Cookie<'static> {
    let expires = OffsetDateTime::from_unix_timestamp(session_cookie.expires.timestamp())
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);

    Cookie::build(session_cookie.name.clone(), session_cookie.value.clone())
        .path(session_cookie.path.clone())
        .http_only(session_cookie.http_only)
        .same_site(SameSite::Lax)
        .secure(session_cookie.secure)
        .max_age(Duration::seconds(session_cookie.max_age))
        .expires(expires)
        .finish()
}
