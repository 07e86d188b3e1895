//! Property listing service module

mod service;

pub use service::{HomeListing, PropertyDetails, PropertyService, FEATURED_LIMIT};
