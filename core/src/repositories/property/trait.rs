//! Property repository trait.

use async_trait::async_trait;

use crate::domain::entities::{NewProperty, Property, PropertyId, UserId};
use crate::errors::DomainError;

/// Repository trait for property listings
///
/// # Example
/// ```no_run
/// # use rf_core::repositories::PropertyRepository;
/// # async fn example(repo: &impl PropertyRepository) -> Result<(), Box<dyn std::error::Error>> {
/// let params = vec![("city".to_string(), "Chicago".to_string())];
/// for property in repo.search(&params).await? {
///     println!("{}: ${}", property.title, property.price);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// List every property, in store order
    async fn list(&self) -> Result<Vec<Property>, DomainError>;

    /// List properties whose fields equal the given query parameters
    ///
    /// Parameters are passed to the store as-is; names starting with `_` are
    /// store directives and never filter.
    async fn search(&self, params: &[(String, String)]) -> Result<Vec<Property>, DomainError>;

    /// List the properties of one owner
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Property>, DomainError>;

    /// Find a property by id
    ///
    /// # Returns
    /// * `Ok(None)` - No property with that id
    async fn find_by_id(&self, id: PropertyId) -> Result<Option<Property>, DomainError>;

    /// Store a new listing; the store assigns its id
    async fn create(&self, property: NewProperty) -> Result<Property, DomainError>;

    /// Replace a listing wholesale
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No property with `property.id`
    async fn replace(&self, property: Property) -> Result<Property, DomainError>;

    /// Mark a listing as verified by an administrator
    async fn mark_verified(&self, id: PropertyId) -> Result<Property, DomainError>;

    /// Delete a listing
    async fn delete(&self, id: PropertyId) -> Result<(), DomainError>;
}
