use async_trait::async_trait;

use crate::domain::entities::{NewNotification, Notification};
use crate::errors::DomainError;

/// Write-only access to user notifications
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: NewNotification) -> Result<Notification, DomainError>;
}
