//! Domain entities representing core business objects.

pub mod appointment;
pub mod notification;
pub mod property;
pub mod user;

// Re-export commonly used types
pub use appointment::{
    Appointment, AppointmentId, AppointmentStatus, NewAppointment, BOOKING_WINDOW_DAYS, TIME_SLOTS,
};
pub use notification::{NewNotification, Notification, NotificationKind};
pub use property::{
    Availability, NewProperty, Property, PropertyDraft, PropertyId, DEFAULT_PROPERTY_IMAGE, PROPERTY_CITIES,
    PROPERTY_TYPES,
};
pub use user::{ProfileUpdate, Role, StoredUser, User, UserId};
