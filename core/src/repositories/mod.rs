pub mod appointment;
pub mod notification;
pub mod property;
pub mod user;

pub use appointment::{AppointmentRepository, InMemoryAppointmentRepository};
pub use notification::{InMemoryNotificationRepository, NotificationRepository};
pub use property::{InMemoryPropertyRepository, PropertyRepository};
pub use user::{InMemoryUserRepository, UserRepository};
