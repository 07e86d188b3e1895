//! Summary figures shown on the owner and admin dashboards.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Appointment, Property, StoredUser};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerStats {
    pub total_properties: usize,
    pub total_appointments: usize,
    pub pending_appointments: usize,
}

impl OwnerStats {
    /// Computed over one owner's properties and appointments
    pub fn from_listing(properties: &[Property], appointments: &[Appointment]) -> Self {
        Self {
            total_properties: properties.len(),
            total_appointments: appointments.len(),
            pending_appointments: appointments.iter().filter(|a| a.is_pending()).count(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: usize,
    pub total_properties: usize,
    pub total_appointments: usize,
    /// Properties still awaiting verification
    pub pending_verifications: usize,
}

impl AdminStats {
    pub fn from_store(users: &[StoredUser], properties: &[Property], appointments: &[Appointment]) -> Self {
        Self {
            total_users: users.len(),
            total_properties: properties.len(),
            total_appointments: appointments.len(),
            pending_verifications: properties.iter().filter(|p| !p.verified).count(),
        }
    }
}
