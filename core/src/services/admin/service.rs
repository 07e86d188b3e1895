//! User and listing verification for administrators

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::domain::entities::{Property, PropertyId, Role, StoredUser, User, UserId};
use crate::domain::value_objects::AdminStats;
use crate::errors::DomainResult;
use crate::repositories::{AppointmentRepository, PropertyRepository, UserRepository};
use crate::services::require_role;

/// Number of unverified listings shown on the dashboard
pub const VERIFICATION_QUEUE_LEN: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub stats: AdminStats,
    /// Most recently added listings still awaiting verification
    pub verification_queue: Vec<Property>,
}

/// Service behind the admin pages. Every operation requires the admin role.
pub struct AdminService<U, P, A>
where
    U: UserRepository,
    P: PropertyRepository,
    A: AppointmentRepository,
{
    user_repository: Arc<U>,
    property_repository: Arc<P>,
    appointment_repository: Arc<A>,
}

impl<U, P, A> AdminService<U, P, A>
where
    U: UserRepository,
    P: PropertyRepository,
    A: AppointmentRepository,
{
    pub fn new(user_repository: Arc<U>, property_repository: Arc<P>, appointment_repository: Arc<A>) -> Self {
        Self {
            user_repository,
            property_repository,
            appointment_repository,
        }
    }

    pub async fn dashboard(&self, admin: &User) -> DomainResult<AdminDashboard> {
        require_role(admin, Role::Admin)?;

        let (users, properties, appointments) = tokio::try_join!(
            self.user_repository.list(),
            self.property_repository.list(),
            self.appointment_repository.list(),
        )?;
        let stats = AdminStats::from_store(&users, &properties, &appointments);

        let unverified: Vec<Property> = properties.into_iter().filter(|p| !p.verified).collect();
        let skip = unverified.len().saturating_sub(VERIFICATION_QUEUE_LEN);
        let verification_queue = unverified.into_iter().skip(skip).collect();

        Ok(AdminDashboard {
            stats,
            verification_queue,
        })
    }

    /// Every account, without credentials
    pub async fn list_users(&self, admin: &User) -> DomainResult<Vec<User>> {
        require_role(admin, Role::Admin)?;
        let users = self.user_repository.list().await?;
        Ok(users.into_iter().map(StoredUser::into_identity).collect())
    }

    pub async fn verify_user(&self, admin: &User, id: UserId) -> DomainResult<User> {
        require_role(admin, Role::Admin)?;
        let user = self.user_repository.mark_verified(id).await?;
        info!(user_id = id, admin_id = admin.id, "User verified");
        Ok(user)
    }

    pub async fn delete_user(&self, admin: &User, id: UserId) -> DomainResult<()> {
        require_role(admin, Role::Admin)?;
        self.user_repository.delete(id).await?;
        info!(user_id = id, admin_id = admin.id, "User deleted");
        Ok(())
    }

    pub async fn verify_property(&self, admin: &User, id: PropertyId) -> DomainResult<Property> {
        require_role(admin, Role::Admin)?;
        let property = self.property_repository.mark_verified(id).await?;
        info!(property_id = id, admin_id = admin.id, "Listing verified");
        Ok(property)
    }
}
