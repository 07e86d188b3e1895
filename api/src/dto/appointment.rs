//! Viewing appointment request types.

use chrono::NaiveDate;
use rf_core::services::BookingRequest;
use rf_core::{AppointmentStatus, PropertyId};
use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/appointments`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub property_id: PropertyId,

    pub scheduled_date: NaiveDate,

    #[validate(length(min = 1, message = "Pick a time slot"))]
    pub scheduled_time: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Message is too long"))]
    pub message: String,
}

impl From<CreateAppointmentRequest> for BookingRequest {
    fn from(request: CreateAppointmentRequest) -> Self {
        BookingRequest {
            property_id: request.property_id,
            scheduled_date: request.scheduled_date,
            scheduled_time: request.scheduled_time,
            message: request.message.trim().to_string(),
        }
    }
}

/// Request body for `PATCH /api/appointments/{id}/status`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_request_from_json() {
        let request: CreateAppointmentRequest = serde_json::from_value(serde_json::json!({
            "propertyId": 3,
            "scheduledDate": "2025-07-21",
            "scheduledTime": "10:00"
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let booking = BookingRequest::from(request);
        assert_eq!(booking.property_id, 3);
        assert!(booking.message.is_empty());
    }

    #[test]
    fn test_status_request_rejects_unknown_status() {
        let result: Result<UpdateStatusRequest, _> =
            serde_json::from_value(serde_json::json!({ "status": "approved" }));
        assert!(result.is_err());
    }
}
