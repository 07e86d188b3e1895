//! Appointment repository trait.

use async_trait::async_trait;

use crate::domain::entities::{Appointment, AppointmentId, AppointmentStatus, NewAppointment, UserId};
use crate::errors::DomainError;

/// Repository trait for viewing requests
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Appointment>, DomainError>;

    /// Requests for properties owned by `owner_id`
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Appointment>, DomainError>;

    /// Requests made by `user_id`
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Appointment>, DomainError>;

    async fn find_by_id(&self, id: AppointmentId) -> Result<Option<Appointment>, DomainError>;

    async fn create(&self, appointment: NewAppointment) -> Result<Appointment, DomainError>;

    /// Set the status of a request
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No appointment with that id
    async fn update_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<Appointment, DomainError>;
}
