//! Business services containing domain logic and use cases.

pub mod admin;
pub mod appointment;
pub mod auth;
pub mod property;

// Re-export commonly used types
pub use admin::{AdminDashboard, AdminService};
pub use appointment::{AppointmentService, AppointmentView, BookingRequest, OwnerDashboard};
pub use auth::{demo_accounts, AuthService, DemoAccount};
pub use property::{HomeListing, PropertyDetails, PropertyService};

use crate::domain::entities::{Role, User};
use crate::errors::{AuthError, DomainResult};

/// Fails with `InsufficientPermissions` unless `user` holds `role`
pub(crate) fn require_role(user: &User, role: Role) -> DomainResult<()> {
    if user.role == role {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions.into())
    }
}
