//! Request and response bodies of the HTTP surface

pub mod appointment;
pub mod auth;
pub mod property;

pub use appointment::{CreateAppointmentRequest, UpdateStatusRequest};
pub use auth::{LoginPage, LoginRequest, LoginResponse, SessionResponse, UpdateProfileRequest};
pub use property::{ListingFormPage, ListingFormQuery, PropertyRequest};
