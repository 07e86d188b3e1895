//! # Infrastructure Layer
//!
//! Concrete data access for the Rentify server. The marketplace keeps no
//! database of its own: users, properties, appointments and notifications
//! live in an external JSON resource store reached over HTTP.
//!
//! ## Modules
//!
//! - **rest**: `reqwest` client for the resource store and the repository
//!   implementations built on it
//! - **seed**: demo data set for running without a store

pub mod error;
pub mod rest;
pub mod seed;

pub use error::InfrastructureError;
pub use rest::{
    RestAppointmentRepository, RestNotificationRepository, RestPropertyRepository,
    RestUserRepository, StoreClient,
};
pub use seed::DemoStore;
