//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::demo::demo_users;
use crate::domain::entities::{ProfileUpdate, User};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

/// Authentication service for login and profile management
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for store access
    user_repository: Arc<U>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Authenticate with email and password
    ///
    /// Demo accounts are checked first and do not need the store. Otherwise
    /// the store's users are fetched and searched.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The identity to start a session with
    /// * `Err(AuthError::InvalidCredentials)` - No account matches
    /// * `Err(DomainError::Store)` - The store could not be reached
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        if let Some(demo) = demo_users()
            .iter()
            .find(|u| u.matches_credentials(email, password))
        {
            info!(user_id = demo.user.id, role = %demo.user.role, "Demo account signed in");
            return Ok(demo.user.clone());
        }

        let users = self.user_repository.list().await?;
        match users.into_iter().find(|u| u.matches_credentials(email, password)) {
            Some(stored) => {
                let user = stored.into_identity();
                info!(user_id = user.id, role = %user.role, "User signed in");
                Ok(user)
            }
            None => {
                warn!("Rejected login attempt");
                Err(DomainError::Auth(AuthError::InvalidCredentials))
            }
        }
    }

    /// Apply a profile edit for the signed-in user
    ///
    /// Returns the identity that should replace the one in the session.
    pub async fn update_profile(&self, current: &User, update: ProfileUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name, email or phone".to_string(),
            }
            .into());
        }

        debug!(user_id = current.id, "Updating profile");
        self.user_repository.update_profile(current.id, &update).await
    }
}
