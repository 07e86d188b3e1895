//! Notification entity sent to users about marketplace activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::property::PropertyId;
use super::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A tenant asked to view one of the recipient's properties
    AppointmentRequest,
}

/// A stored notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub recipient_id: UserId,
    pub sender_id: UserId,
    pub property_id: PropertyId,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// A notification that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub recipient_id: UserId,
    pub sender_id: UserId,
    pub property_id: PropertyId,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl NewNotification {
    /// Tells an owner that `sender_id` requested a viewing of their property
    pub fn appointment_request(
        recipient_id: UserId,
        sender_id: UserId,
        property_id: PropertyId,
        property_title: &str,
    ) -> Self {
        Self {
            kind: NotificationKind::AppointmentRequest,
            recipient_id,
            sender_id,
            property_id,
            message: format!("New appointment request for {}", property_title),
            timestamp: Utc::now(),
        }
    }

    pub fn with_id(self, id: i64) -> Notification {
        Notification {
            id,
            kind: self.kind,
            recipient_id: self.recipient_id,
            sender_id: self.sender_id,
            property_id: self.property_id,
            message: self.message,
            timestamp: self.timestamp,
        }
    }
}
