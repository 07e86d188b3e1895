//! Demo data for running without a resource store.
//!
//! Mirrors the shape of the mock store the marketplace was developed
//! against: ten users (including the three demo accounts), listings spread
//! over the supported cities, and a handful of viewing requests.

use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

use rf_core::domain::entities::{
    Appointment, AppointmentStatus, Availability, Property, Role, StoredUser, User,
};
use rf_core::repositories::{
    InMemoryAppointmentRepository, InMemoryNotificationRepository, InMemoryPropertyRepository,
    InMemoryUserRepository,
};

/// The four in-memory repositories, seeded
#[derive(Clone)]
pub struct DemoStore {
    pub users: Arc<InMemoryUserRepository>,
    pub properties: Arc<InMemoryPropertyRepository>,
    pub appointments: Arc<InMemoryAppointmentRepository>,
    pub notifications: Arc<InMemoryNotificationRepository>,
}

impl DemoStore {
    /// Repositories filled with the demo data set
    pub fn seeded() -> Self {
        let users = demo_users();
        let properties = demo_properties();
        let appointments = demo_appointments();
        info!(
            users = users.len(),
            properties = properties.len(),
            appointments = appointments.len(),
            "Seeded in-memory store"
        );

        Self {
            users: Arc::new(InMemoryUserRepository::with_users(users)),
            properties: Arc::new(InMemoryPropertyRepository::with_properties(properties)),
            appointments: Arc::new(InMemoryAppointmentRepository::with_appointments(appointments)),
            notifications: Arc::new(InMemoryNotificationRepository::new()),
        }
    }

    /// Repositories with no data at all
    pub fn empty() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            properties: Arc::new(InMemoryPropertyRepository::new()),
            appointments: Arc::new(InMemoryAppointmentRepository::new()),
            notifications: Arc::new(InMemoryNotificationRepository::new()),
        }
    }
}

const USERS: [(i64, Role, &str, &str); 10] = [
    (1, Role::Admin, "Admin Alice", "admin123"),
    (2, Role::Admin, "Admin Bob", "admin123"),
    (3, Role::Owner, "Owner Charlie", "owner123"),
    (4, Role::Owner, "Owner Diana", "owner123"),
    (5, Role::Owner, "Owner Ethan", "owner123"),
    (6, Role::Owner, "Owner Fiona", "owner123"),
    (7, Role::Tenant, "Tenant George", "tenant123"),
    (8, Role::Tenant, "Tenant Hannah", "tenant123"),
    (9, Role::Tenant, "Tenant Ian", "tenant123"),
    (10, Role::Tenant, "Tenant Julia", "tenant123"),
];

fn demo_users() -> Vec<StoredUser> {
    USERS
        .iter()
        .map(|(id, role, name, password)| {
            StoredUser::new(
                User {
                    id: *id,
                    role: *role,
                    name: name.to_string(),
                    email: format!("{}{}@rentify.com", role, id),
                    phone: format!("12345678{:02}", id - 1),
                    verified: *id <= 8,
                },
                *password,
            )
        })
        .collect()
}

/// (title, city, type, price, owner, highlight, verified, available)
const PROPERTIES: [(&str, &str, &str, i64, i64, bool, bool, bool); 10] = [
    ("Modern Downtown Apartment", "New York", "Apartment", 3200, 4, true, true, true),
    ("Sunny Beach House", "Los Angeles", "House", 4500, 3, true, true, true),
    ("Lakeview Condo", "Chicago", "Condo", 2100, 4, true, true, false),
    ("Cozy Studio Near Campus", "Houston", "Studio", 950, 5, false, true, true),
    ("Desert Villa with Pool", "Phoenix", "Villa", 5200, 6, true, true, true),
    ("Brownstone Apartment", "New York", "Apartment", 2800, 3, false, false, true),
    ("Family House with Garden", "Houston", "House", 1900, 4, false, false, true),
    ("Loft in Arts District", "Los Angeles", "Studio", 2300, 5, false, true, true),
    ("Riverside Condo", "Chicago", "Condo", 1750, 6, false, false, true),
    ("Suburban Family Home", "Phoenix", "House", 2200, 4, false, false, false),
];

fn demo_properties() -> Vec<Property> {
    let first_posted = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();

    PROPERTIES
        .iter()
        .zip(1i64..)
        .map(|(&(title, city, kind, price, owner_id, highlight, verified, available), id)| Property {
            id,
            title: title.to_string(),
            description: format!("{} in {}, ready to move in.", kind, city),
            city: city.to_string(),
            property_type: kind.to_string(),
            price,
            images: vec![format!("https://picsum.photos/seed/rentify{}/800/600", id)],
            owner_id,
            highlight,
            date_posted: first_posted + Duration::days(id * 3),
            verified,
            availability: if available {
                Availability::Available
            } else {
                Availability::NotAvailable
            },
        })
        .collect()
}

fn demo_appointments() -> Vec<Appointment> {
    let today = Utc::now().date_naive();
    let requests = [
        (1, 1, 8, 4, AppointmentStatus::Pending, 3, "10:00"),
        (2, 3, 8, 4, AppointmentStatus::Confirmed, 5, "14:00"),
        (3, 2, 7, 3, AppointmentStatus::Pending, 2, "11:00"),
        (4, 5, 9, 6, AppointmentStatus::Cancelled, 7, "16:00"),
    ];

    requests
        .iter()
        .map(|&(id, property_id, user_id, owner_id, status, in_days, time)| Appointment {
            id,
            property_id,
            user_id,
            owner_id,
            status,
            scheduled_date: today + Duration::days(in_days),
            scheduled_time: time.to_string(),
            message: String::new(),
            timestamp: Utc::now() - Duration::days(in_days),
        })
        .collect()
}
