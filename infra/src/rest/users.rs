//! REST implementation of the UserRepository trait.
//!
//! Users are documents of the store's `/users` collection. Profile edits and
//! verification are partial `PATCH` updates, so fields this server does not
//! know about (and the stored password) are left alone.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use rf_core::domain::entities::{ProfileUpdate, StoredUser, User, UserId};
use rf_core::errors::DomainError;
use rf_core::repositories::UserRepository;

use super::StoreClient;

/// UserRepository backed by the resource store
pub struct RestUserRepository {
    client: StoreClient,
}

impl RestUserRepository {
    /// Create a new REST user repository
    ///
    /// # Arguments
    /// * `client` - Shared store client
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    fn path(id: UserId) -> String {
        format!("/users/{}", id)
    }
}

#[async_trait]
impl UserRepository for RestUserRepository {
    async fn list(&self) -> Result<Vec<StoredUser>, DomainError> {
        Ok(self.client.get("/users", &[]).await?)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.client.get_optional(&Self::path(id)).await?)
    }

    async fn update_profile(&self, id: UserId, update: &ProfileUpdate) -> Result<User, DomainError> {
        Ok(self.client.patch(&Self::path(id), update).await?)
    }

    async fn mark_verified(&self, id: UserId) -> Result<User, DomainError> {
        Ok(self
            .client
            .patch(&Self::path(id), &json!({ "verified": true }))
            .await?)
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        self.client.delete(&Self::path(id)).await?;
        info!(user_id = id, "Deleted user from store");
        Ok(())
    }
}
