//! Shared application state handed to every handler.

use std::sync::Arc;

use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_core::services::{AdminService, AppointmentService, AuthService, PropertyService};
use rf_core::{AccessPolicy, SessionStore};
use rf_shared::SessionConfig;

/// Application state that holds shared services
pub struct AppState<U, P, A, N>
where
    U: UserRepository,
    P: PropertyRepository,
    A: AppointmentRepository,
    N: NotificationRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub property_service: Arc<PropertyService<U, P>>,
    pub appointment_service: Arc<AppointmentService<P, A, N>>,
    pub admin_service: Arc<AdminService<U, P, A>>,
    /// Empty session store every request is restored from
    pub sessions: SessionStore,
    pub policy: AccessPolicy,
}

impl<U, P, A, N> AppState<U, P, A, N>
where
    U: UserRepository,
    P: PropertyRepository,
    A: AppointmentRepository,
    N: NotificationRepository,
{
    /// Wires the services over one set of repositories
    pub fn new(
        users: Arc<U>,
        properties: Arc<P>,
        appointments: Arc<A>,
        notifications: Arc<N>,
        session_config: &SessionConfig,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users.clone())),
            property_service: Arc::new(PropertyService::new(users.clone(), properties.clone())),
            appointment_service: Arc::new(AppointmentService::new(
                properties.clone(),
                appointments.clone(),
                notifications,
            )),
            admin_service: Arc::new(AdminService::new(users, properties, appointments)),
            sessions: SessionStore::new(session_config),
            policy: AccessPolicy::default(),
        }
    }
}
