//! CORS middleware configuration for cross-origin requests.
//!
//! The browser front end sends the session cookie with its API calls, so
//! credentials are always supported. Origins come from [`CorsConfig`]: `*`
//! accepts any origin (development), otherwise only the listed ones.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use rf_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::CACHE_CONTROL,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age)
        .supports_credentials();

    if config.allow_any_origin() {
        log::info!("Configuring CORS to accept any origin");
        return cors.allow_any_origin();
    }

    config.allowed_origins.iter().fold(cors, |cors, origin| {
        log::info!("Adding allowed origin: {}", origin);
        cors.allowed_origin(origin)
    })
}
