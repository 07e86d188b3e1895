//! Authentication service module
//!
//! Email and password login against the built-in demo accounts and the
//! store's users, plus self-service profile edits.

mod demo;
mod service;


pub use demo::{demo_accounts, DemoAccount};
pub use service::AuthService;
