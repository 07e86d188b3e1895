//! Appointment entity representing a viewing request for a property.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::property::PropertyId;
use super::user::UserId;

/// Identifier assigned to appointments by the resource store
pub type AppointmentId = i64;

/// Bookable viewing times
pub const TIME_SLOTS: [&str; 9] = [
    "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

/// How many days ahead a viewing may be booked
pub const BOOKING_WINDOW_DAYS: i64 = 30;

/// Lifecycle of a viewing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Owners answer pending requests only, and never back to pending
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Pending, AppointmentStatus::Confirmed)
                | (AppointmentStatus::Pending, AppointmentStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored viewing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub property_id: PropertyId,
    /// The user who requested the viewing
    pub user_id: UserId,
    pub owner_id: UserId,
    pub status: AppointmentStatus,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub scheduled_time: String,
    #[serde(default)]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Appointment {
    pub fn is_pending(&self) -> bool {
        self.status == AppointmentStatus::Pending
    }
}

/// A viewing request that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub property_id: PropertyId,
    pub user_id: UserId,
    pub owner_id: UserId,
    pub status: AppointmentStatus,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl NewAppointment {
    /// Attaches the identifier assigned by the store
    pub fn with_id(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            property_id: self.property_id,
            user_id: self.user_id,
            owner_id: self.owner_id,
            status: self.status,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            message: self.message,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        use AppointmentStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Confirmed));
    }

    #[test]
    fn test_appointment_wire_format() {
        let json = r#"{
            "id": 3,
            "propertyId": 10,
            "userId": 8,
            "ownerId": 4,
            "status": "pending",
            "scheduledDate": "2025-08-02",
            "scheduledTime": "14:00",
            "message": "Is parking included?",
            "timestamp": "2025-07-20T09:30:00.000Z"
        }"#;

        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert!(appointment.is_pending());
        assert_eq!(appointment.scheduled_time, "14:00");
        assert_eq!(appointment.owner_id, 4);

        let value = serde_json::to_value(&appointment).unwrap();
        assert_eq!(value["propertyId"], 10);
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id":1,"propertyId":2,"userId":8,"ownerId":4,"status":"confirmed",
            "scheduledDate":"2025-08-02","timestamp":"2025-07-20T09:30:00Z"}"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.scheduled_time, "");
        assert_eq!(appointment.message, "");
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    }
}
