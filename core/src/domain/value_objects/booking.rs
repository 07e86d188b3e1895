//! Booking window for viewing appointments.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{BOOKING_WINDOW_DAYS, TIME_SLOTS};
use crate::errors::ValidationError;

/// Range of dates a viewing may be booked for, relative to a given day:
/// from tomorrow up to [`BOOKING_WINDOW_DAYS`] days ahead, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl BookingWindow {
    pub fn starting_after(today: NaiveDate) -> Self {
        Self {
            earliest: today + Duration::days(1),
            latest: today + Duration::days(BOOKING_WINDOW_DAYS),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.earliest && date <= self.latest
    }

    /// Checks a requested date and time slot
    pub fn validate(&self, date: NaiveDate, time: &str) -> Result<(), ValidationError> {
        if !self.contains(date) {
            return Err(ValidationError::OutOfRange {
                field: "scheduledDate".to_string(),
                min: self.earliest.to_string(),
                max: self.latest.to_string(),
            });
        }

        let time = time.trim();
        if time.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "scheduledTime".to_string(),
            });
        }
        if !TIME_SLOTS.contains(&time) {
            return Err(ValidationError::InvalidTimeSlot {
                slot: time.to_string(),
            });
        }

        Ok(())
    }
}
