//! # Rentify Core
//!
//! Core business logic and domain layer for the Rentify backend.
//! This crate contains domain entities, the route access policy, the session
//! store, repository interfaces, business services and error types.

pub mod access;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod session;

// Re-export commonly used types for convenience
pub use access::{AccessDecision, AccessPolicy, RedirectTarget, RouteClass, RouteTable};
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use session::{SessionCodec, SessionCookie, SessionStore};
