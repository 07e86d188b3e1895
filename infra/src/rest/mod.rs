//! Resource store access over HTTP.

mod appointments;
mod client;
mod notifications;
mod properties;
mod users;

pub use appointments::RestAppointmentRepository;
pub use client::StoreClient;
pub use notifications::RestNotificationRepository;
pub use properties::RestPropertyRepository;
pub use users::RestUserRepository;

/// Equality filter on one field, in the store's query syntax
fn field_eq(name: &str, value: impl ToString) -> Vec<(String, String)> {
    vec![(name.to_string(), value.to_string())]
}
