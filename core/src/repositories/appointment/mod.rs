//! Appointment repository module.

mod r#trait;
pub use r#trait::AppointmentRepository;

mod memory;
pub use memory::InMemoryAppointmentRepository;
