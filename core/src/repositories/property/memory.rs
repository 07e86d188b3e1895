//! In-memory implementation of PropertyRepository

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{NewProperty, Property, PropertyId, UserId};
use crate::errors::DomainError;

use super::PropertyRepository;

/// Property repository holding its listings in process memory
#[derive(Clone, Default)]
pub struct InMemoryPropertyRepository {
    properties: Arc<RwLock<Vec<Property>>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties: Arc::new(RwLock::new(properties)),
        }
    }
}

/// Equality match of a query parameter against the stored JSON document
fn field_matches(document: &Value, name: &str, expected: &str) -> bool {
    match document.get(name) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == expected,
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn list(&self) -> Result<Vec<Property>, DomainError> {
        Ok(self.properties.read().await.clone())
    }

    async fn search(&self, params: &[(String, String)]) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        let mut found = Vec::new();

        for property in properties.iter() {
            let document = serde_json::to_value(property).map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize property: {}", e),
            })?;
            let matches = params
                .iter()
                .filter(|(name, _)| !name.starts_with('_'))
                .all(|(name, value)| field_matches(&document, name, value));
            if matches {
                found.push(property.clone());
            }
        }

        Ok(found)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties.iter().filter(|p| p.owner_id == owner_id).cloned().collect())
    }

    async fn find_by_id(&self, id: PropertyId) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, property: NewProperty) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        let id = properties.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let property = property.with_id(id);
        properties.push(property.clone());
        Ok(property)
    }

    async fn replace(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        let slot = properties
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| DomainError::not_found(format!("Property {}", property.id)))?;
        *slot = property.clone();
        Ok(property)
    }

    async fn mark_verified(&self, id: PropertyId) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        let property = properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(format!("Property {}", id)))?;
        property.verify();
        Ok(property.clone())
    }

    async fn delete(&self, id: PropertyId) -> Result<(), DomainError> {
        let mut properties = self.properties.write().await;
        let before = properties.len();
        properties.retain(|p| p.id != id);
        if properties.len() == before {
            return Err(DomainError::not_found(format!("Property {}", id)));
        }
        Ok(())
    }
}
