//! HTTP surface of the Rentify marketplace.
//!
//! Page models and JSON API endpoints served by actix-web, with the route
//! gate deciding which page navigations need a session.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
