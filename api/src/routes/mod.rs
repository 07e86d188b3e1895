//! Route handlers
//!
//! - `pages` - JSON page models behind the route gate
//! - `auth` - login, logout and session lookup
//! - `profile` - self-service profile edits
//! - `properties` - listing queries and owner listing management
//! - `appointments` - viewing requests and owner answers
//! - `admin` - user verification and removal

pub mod admin;
pub mod appointments;
pub mod auth;
pub mod pages;
pub mod profile;
pub mod properties;
