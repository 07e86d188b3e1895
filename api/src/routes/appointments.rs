//! Viewing appointment API

use actix_web::{web, HttpResponse};
use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_core::AppointmentId;
use rf_shared::ApiResponse;
use validator::Validate;

use crate::dto::{CreateAppointmentRequest, UpdateStatusRequest};
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Handler for POST /api/appointments
///
/// # Request Body
///
/// ```json
/// {
///     "propertyId": 3,
///     "scheduledDate": "2025-07-21",
///     "scheduledTime": "10:00",
///     "message": "Is parking included?"
/// }
/// ```
///
/// Responds 201 Created with the pending appointment. The date must fall
/// between tomorrow and 30 days ahead and the time must be an offered slot.
/// The owner is notified; a failed notification does not fail the booking.
pub async fn create_appointment<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
    request: web::Json<CreateAppointmentRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let appointment = state
        .appointment_service
        .book(&user.0, request.into())
        .await?;

    Ok(HttpResponse::Created().json(
        ApiResponse::success(appointment).with_message("Appointment request sent"),
    ))
}

/// Handler for PATCH /api/appointments/{id}/status
///
/// Owners confirm or cancel pending requests on their own listings.
///
/// ## Errors
/// - 400 Bad Request: the appointment was already answered
/// - 403 Forbidden: not an owner, or not this appointment's owner
/// - 404 Not Found: no such appointment
pub async fn update_appointment_status<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
    id: web::Path<AppointmentId>,
    request: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let appointment = state
        .appointment_service
        .update_status(&user.0, id.into_inner(), request.status)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(appointment)))
}
