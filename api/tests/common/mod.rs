//! Shared fixtures for the API integration tests

use actix_web::{cookie::Cookie, web};
use rf_api::AppState;
use rf_core::repositories::{
    InMemoryAppointmentRepository, InMemoryNotificationRepository, InMemoryPropertyRepository,
    InMemoryUserRepository,
};
use rf_infra::DemoStore;
use rf_shared::{AppConfig, SessionConfig};

pub type DemoState = AppState<
    InMemoryUserRepository,
    InMemoryPropertyRepository,
    InMemoryAppointmentRepository,
    InMemoryNotificationRepository,
>;

/// Development configuration with the access log off
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.logging.access_log = false;
    config
}

/// State over a freshly seeded demo store, plus the store for inspection
pub fn demo_state(session: &SessionConfig) -> (web::Data<DemoState>, DemoStore) {
    let store = DemoStore::seeded();
    let state = AppState::new(
        store.users.clone(),
        store.properties.clone(),
        store.appointments.clone(),
        store.notifications.clone(),
        session,
    );
    (web::Data::new(state), store)
}

/// Unsigned session cookie carrying the given identity JSON
pub fn session_cookie(identity: serde_json::Value) -> Cookie<'static> {
    Cookie::new("auth-user", identity.to_string())
}

pub fn owner_cookie() -> Cookie<'static> {
    session_cookie(serde_json::json!({
        "id": 4,
        "role": "owner",
        "name": "Owner Diana",
        "email": "owner4@rentify.com",
        "phone": "1234567803",
        "verified": true
    }))
}

pub fn tenant_cookie() -> Cookie<'static> {
    session_cookie(serde_json::json!({
        "id": 8,
        "role": "tenant",
        "name": "Tenant Hannah",
        "email": "tenant8@rentify.com",
        "verified": true
    }))
}

pub fn admin_cookie() -> Cookie<'static> {
    session_cookie(serde_json::json!({
        "id": 1,
        "role": "admin",
        "name": "Admin Alice",
        "email": "admin1@rentify.com",
        "verified": true
    }))
}
