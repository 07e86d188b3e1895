//! REST implementation of the PropertyRepository trait.

use async_trait::async_trait;
use serde_json::json;

use rf_core::domain::entities::{NewProperty, Property, PropertyId, UserId};
use rf_core::errors::DomainError;
use rf_core::repositories::PropertyRepository;

use super::{field_eq, StoreClient};

/// PropertyRepository backed by the store's `/properties` collection
pub struct RestPropertyRepository {
    client: StoreClient,
}

impl RestPropertyRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    fn path(id: PropertyId) -> String {
        format!("/properties/{}", id)
    }
}

#[async_trait]
impl PropertyRepository for RestPropertyRepository {
    async fn list(&self) -> Result<Vec<Property>, DomainError> {
        Ok(self.client.get("/properties", &[]).await?)
    }

    async fn search(&self, params: &[(String, String)]) -> Result<Vec<Property>, DomainError> {
        Ok(self.client.get("/properties", params).await?)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Property>, DomainError> {
        Ok(self
            .client
            .get("/properties", &field_eq("ownerId", owner_id))
            .await?)
    }

    async fn find_by_id(&self, id: PropertyId) -> Result<Option<Property>, DomainError> {
        Ok(self.client.get_optional(&Self::path(id)).await?)
    }

    async fn create(&self, property: NewProperty) -> Result<Property, DomainError> {
        Ok(self.client.post("/properties", &property).await?)
    }

    async fn replace(&self, property: Property) -> Result<Property, DomainError> {
        Ok(self.client.put(&Self::path(property.id), &property).await?)
    }

    async fn mark_verified(&self, id: PropertyId) -> Result<Property, DomainError> {
        Ok(self
            .client
            .patch(&Self::path(id), &json!({ "verified": true }))
            .await?)
    }

    async fn delete(&self, id: PropertyId) -> Result<(), DomainError> {
        Ok(self.client.delete(&Self::path(id)).await?)
    }
}
