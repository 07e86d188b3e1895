//! User repository trait defining the interface for user data access.
//!
//! Users live in the external resource store. The marketplace only reads
//! them, applies profile edits and administrator actions; accounts are not
//! created through this interface.

use async_trait::async_trait;

use crate::domain::entities::{ProfileUpdate, StoredUser, User, UserId};
use crate::errors::DomainError;

/// Repository trait for user data access
///
/// Implementations talk to the resource store (or hold users in memory) and
/// translate failures into [`DomainError`].
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use rf_core::domain::entities::{ProfileUpdate, StoredUser, User, UserId};
/// use rf_core::errors::DomainError;
/// use rf_core::repositories::UserRepository;
///
/// struct FixedUserRepository {
///     users: Vec<StoredUser>,
/// }
///
/// #[async_trait]
/// impl UserRepository for FixedUserRepository {
///     async fn list(&self) -> Result<Vec<StoredUser>, DomainError> {
///         Ok(self.users.clone())
///     }
///
///     async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
///         Ok(self
///             .users
///             .iter()
///             .find(|u| u.user.id == id)
///             .map(|u| u.user.clone()))
///     }
///
///     async fn update_profile(&self, id: UserId, _: &ProfileUpdate) -> Result<User, DomainError> {
///         Err(DomainError::not_found(format!("User {}", id)))
///     }
///
///     async fn mark_verified(&self, id: UserId) -> Result<User, DomainError> {
///         Err(DomainError::not_found(format!("User {}", id)))
///     }
///
///     async fn delete(&self, _id: UserId) -> Result<(), DomainError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user in the store, credentials included
    ///
    /// Used for login matching and the administration pages.
    ///
    /// # Returns
    /// * `Ok(Vec<StoredUser>)` - All users, in store order
    /// * `Err(DomainError)` - The store could not be reached
    async fn list(&self) -> Result<Vec<StoredUser>, DomainError>;

    /// Find a user by their identifier
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id
    /// * `Err(DomainError)` - Store error
    ///
    /// # Example
    /// ```no_run
    /// # use rf_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// if let Some(owner) = repo.find_by_id(4).await? {
    ///     println!("Contact {} at {}", owner.name, owner.phone);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Apply a partial profile edit
    ///
    /// Only the fields present in `update` change.
    ///
    /// # Returns
    /// * `Ok(User)` - The identity after the edit
    /// * `Err(DomainError::NotFound)` - No user with that id
    /// * `Err(DomainError)` - Store error
    async fn update_profile(&self, id: UserId, update: &ProfileUpdate) -> Result<User, DomainError>;

    /// Mark a user as verified by an administrator
    ///
    /// # Returns
    /// * `Ok(User)` - The verified user
    /// * `Err(DomainError::NotFound)` - No user with that id
    async fn mark_verified(&self, id: UserId) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(())` - User removed
    /// * `Err(DomainError::NotFound)` - No user with that id
    /// * `Err(DomainError)` - Store error
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;
}
