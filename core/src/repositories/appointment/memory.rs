//! In-memory implementation of AppointmentRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Appointment, AppointmentId, AppointmentStatus, NewAppointment, UserId};
use crate::errors::DomainError;

use super::AppointmentRepository;

#[derive(Clone, Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Arc<RwLock<Vec<Appointment>>>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Arc::new(RwLock::new(appointments)),
        }
    }

    async fn filtered<F>(&self, keep: F) -> Vec<Appointment>
    where
        F: Fn(&Appointment) -> bool + Send,
    {
        let appointments = self.appointments.read().await;
        appointments.iter().filter(|&a| keep(a)).cloned().collect()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn list(&self) -> Result<Vec<Appointment>, DomainError> {
        Ok(self.appointments.read().await.clone())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Appointment>, DomainError> {
        Ok(self.filtered(|a| a.owner_id == owner_id).await)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Appointment>, DomainError> {
        Ok(self.filtered(|a| a.user_id == user_id).await)
    }

    async fn find_by_id(&self, id: AppointmentId) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().await;
        Ok(appointments.iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, appointment: NewAppointment) -> Result<Appointment, DomainError> {
        let mut appointments = self.appointments.write().await;
        let id = appointments.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let appointment = appointment.with_id(id);
        appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn update_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<Appointment, DomainError> {
        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::not_found(format!("Appointment {}", id)))?;
        appointment.status = status;
        Ok(appointment.clone())
    }
}
