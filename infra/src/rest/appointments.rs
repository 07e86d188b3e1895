//! REST implementation of the AppointmentRepository trait.

use async_trait::async_trait;
use serde_json::json;

use rf_core::domain::entities::{Appointment, AppointmentId, AppointmentStatus, NewAppointment, UserId};
use rf_core::errors::DomainError;
use rf_core::repositories::AppointmentRepository;

use super::{field_eq, StoreClient};

pub struct RestAppointmentRepository {
    client: StoreClient,
}

impl RestAppointmentRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AppointmentRepository for RestAppointmentRepository {
    async fn list(&self) -> Result<Vec<Appointment>, DomainError> {
        Ok(self.client.get("/appointments", &[]).await?)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Appointment>, DomainError> {
        Ok(self
            .client
            .get("/appointments", &field_eq("ownerId", owner_id))
            .await?)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Appointment>, DomainError> {
        Ok(self
            .client
            .get("/appointments", &field_eq("userId", user_id))
            .await?)
    }

    async fn find_by_id(&self, id: AppointmentId) -> Result<Option<Appointment>, DomainError> {
        Ok(self.client.get_optional(&format!("/appointments/{}", id)).await?)
    }

    async fn create(&self, appointment: NewAppointment) -> Result<Appointment, DomainError> {
        Ok(self.client.post("/appointments", &appointment).await?)
    }

    async fn update_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<Appointment, DomainError> {
        Ok(self
            .client
            .patch(&format!("/appointments/{}", id), &json!({ "status": status }))
            .await?)
    }
}
