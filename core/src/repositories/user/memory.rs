//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{ProfileUpdate, StoredUser, User, UserId};
use crate::errors::DomainError;

use super::UserRepository;

/// User repository holding its users in process memory.
///
/// Backs the self-contained demo mode and the service tests.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<StoredUser>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`
    pub fn with_users(users: Vec<StoredUser>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    async fn modify<F>(&self, id: UserId, change: F) -> Result<User, DomainError>
    where
        F: FnOnce(&mut User) + Send,
    {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|u| u.user.id == id)
            .ok_or_else(|| DomainError::not_found(format!("User {}", id)))?;
        change(&mut stored.user);
        Ok(stored.user.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<StoredUser>, DomainError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user.id == id).map(|u| u.user.clone()))
    }

    async fn update_profile(&self, id: UserId, update: &ProfileUpdate) -> Result<User, DomainError> {
        self.modify(id, |user| user.apply_profile(update)).await
    }

    async fn mark_verified(&self, id: UserId) -> Result<User, DomainError> {
        self.modify(id, User::verify).await
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.user.id != id);
        if users.len() == before {
            return Err(DomainError::not_found(format!("User {}", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;

    fn stored(id: UserId, role: Role, verified: bool) -> StoredUser {
        StoredUser::new(
            User {
                id,
                role,
                name: format!("User {}", id),
                email: format!("user{}@rentify.com", id),
                phone: String::new(),
                verified,
            },
            "secret",
        )
    }

    #[tokio::test]
    async fn test_verify_and_delete() {
        let repo = InMemoryUserRepository::with_users(vec![
            stored(1, Role::Admin, true),
            stored(2, Role::Tenant, false),
        ]);

        let verified = repo.mark_verified(2).await.unwrap();
        assert!(verified.verified);

        repo.delete(1).await.unwrap();
        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].user.id, 2);

        assert!(matches!(repo.delete(1).await, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_profile_keeps_password() {
        let repo = InMemoryUserRepository::with_users(vec![stored(8, Role::Tenant, true)]);
        let update = ProfileUpdate {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let user = repo.update_profile(8, &update).await.unwrap();
        assert_eq!(user.name, "Renamed");

        let users = repo.list().await.unwrap();
        assert_eq!(users[0].password.as_deref(), Some("secret"));
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }
}
