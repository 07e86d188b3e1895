//! Administration service module

mod service;

pub use service::{AdminDashboard, AdminService, VERIFICATION_QUEUE_LEN};
