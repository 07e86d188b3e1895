//! Role-based access control for page navigation.
//!
//! [`RouteTable`] classifies request paths, [`AccessPolicy`] turns a
//! classification and the current session into an allow/redirect decision.
//! Both are pure; the HTTP layer applies the decision.

pub mod policy;
pub mod route;

pub use policy::{AccessDecision, AccessPolicy, RedirectTarget};
pub use route::{normalize_path, RouteClass, RouteTable};
