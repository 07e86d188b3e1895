//! Viewing appointment service module
//!
//! Tenants (and any signed-in user) request viewings; owners answer them
//! from their dashboard.

mod service;


pub use service::{AppointmentService, AppointmentView, BookingRequest, OwnerDashboard};
