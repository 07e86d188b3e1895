//! Appointment booking and owner-side handling

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::{
    Appointment, AppointmentId, AppointmentStatus, NewAppointment, NewNotification, Property,
    PropertyId, Role, User,
};
use crate::domain::value_objects::{BookingWindow, OwnerStats};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{AppointmentRepository, NotificationRepository, PropertyRepository};
use crate::services::require_role;

/// A viewing request as submitted from the property page
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub property_id: PropertyId,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: String,
    #[serde(default)]
    pub message: String,
}

/// An appointment next to the property it concerns
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    pub appointment: Appointment,
    /// Absent when the property has been removed since
    pub property: Option<Property>,
}

/// Owner dashboard contents
#[derive(Debug, Clone, Serialize)]
pub struct OwnerDashboard {
    pub properties: Vec<Property>,
    pub appointments: Vec<Appointment>,
    pub stats: OwnerStats,
}

/// Service for booking viewings and answering them
pub struct AppointmentService<P, A, N>
where
    P: PropertyRepository,
    A: AppointmentRepository,
    N: NotificationRepository,
{
    property_repository: Arc<P>,
    appointment_repository: Arc<A>,
    notification_repository: Arc<N>,
}

impl<P, A, N> AppointmentService<P, A, N>
where
    P: PropertyRepository,
    A: AppointmentRepository,
    N: NotificationRepository,
{
    pub fn new(
        property_repository: Arc<P>,
        appointment_repository: Arc<A>,
        notification_repository: Arc<N>,
    ) -> Self {
        Self {
            property_repository,
            appointment_repository,
            notification_repository,
        }
    }

    /// Book a viewing for the signed-in user
    ///
    /// The request is stored as `pending` for the property's owner. The owner
    /// is then notified; a failed notification does not fail the booking.
    ///
    /// # Returns
    ///
    /// * `Ok(Appointment)` - The stored request
    /// * `Err(DomainError::NotFound)` - Unknown property
    /// * `Err(DomainError::ValidationErr)` - Date outside the booking window
    ///   or time not among the offered slots
    pub async fn book(&self, user: &User, request: BookingRequest) -> DomainResult<Appointment> {
        let window = BookingWindow::starting_after(Utc::now().date_naive());
        window.validate(request.scheduled_date, &request.scheduled_time)?;

        let property = self
            .property_repository
            .find_by_id(request.property_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Property {}", request.property_id)))?;

        let appointment = self
            .appointment_repository
            .create(NewAppointment {
                property_id: property.id,
                user_id: user.id,
                owner_id: property.owner_id,
                status: AppointmentStatus::Pending,
                scheduled_date: request.scheduled_date,
                scheduled_time: request.scheduled_time.trim().to_string(),
                message: request.message,
                timestamp: Utc::now(),
            })
            .await?;
        info!(
            appointment_id = appointment.id,
            property_id = property.id,
            user_id = user.id,
            "Viewing requested"
        );

        let notification =
            NewNotification::appointment_request(property.owner_id, user.id, property.id, &property.title);
        if let Err(e) = self.notification_repository.create(notification).await {
            warn!(owner_id = property.owner_id, "Failed to notify owner of viewing request: {}", e);
        }

        Ok(appointment)
    }

    /// The signed-in user's own requests, newest first
    pub async fn list_for_user(&self, user: &User) -> DomainResult<Vec<AppointmentView>> {
        let (appointments, properties) = tokio::try_join!(
            self.appointment_repository.list_by_user(user.id),
            self.property_repository.list(),
        )?;

        let by_id: HashMap<PropertyId, Property> =
            properties.into_iter().map(|p| (p.id, p)).collect();

        let mut views: Vec<AppointmentView> = appointments
            .into_iter()
            .map(|appointment| AppointmentView {
                property: by_id.get(&appointment.property_id).cloned(),
                appointment,
            })
            .collect();
        views.sort_by(|a, b| b.appointment.timestamp.cmp(&a.appointment.timestamp));
        Ok(views)
    }

    /// Properties, requests and counts for the signed-in owner
    pub async fn owner_dashboard(&self, owner: &User) -> DomainResult<OwnerDashboard> {
        require_role(owner, Role::Owner)?;

        let (properties, appointments) = tokio::try_join!(
            self.property_repository.list_by_owner(owner.id),
            self.appointment_repository.list_by_owner(owner.id),
        )?;
        let stats = OwnerStats::from_listing(&properties, &appointments);

        Ok(OwnerDashboard {
            properties,
            appointments,
            stats,
        })
    }

    /// Confirm or cancel a pending request on one of the owner's properties
    pub async fn update_status(
        &self,
        owner: &User,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> DomainResult<Appointment> {
        require_role(owner, Role::Owner)?;

        let appointment = self
            .appointment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Appointment {}", id)))?;

        if appointment.owner_id != owner.id {
            return Err(AuthError::NotResourceOwner.into());
        }
        if !appointment.status.can_transition_to(status) {
            return Err(ValidationError::InvalidStatusTransition {
                from: appointment.status.to_string(),
                to: status.to_string(),
            }
            .into());
        }

        let updated = self.appointment_repository.update_status(id, status).await?;
        info!(appointment_id = id, status = %status, "Appointment answered");
        Ok(updated)
    }
}
