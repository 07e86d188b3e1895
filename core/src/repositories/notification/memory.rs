//! In-memory implementation of NotificationRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{NewNotification, Notification, UserId};
use crate::errors::DomainError;

use super::NotificationRepository;

#[derive(Clone, Default)]
pub struct InMemoryNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications addressed to `recipient_id`, oldest first
    pub async fn for_recipient(&self, recipient_id: UserId) -> Vec<Notification> {
        let notifications = self.notifications.read().await;
        notifications
            .iter()
            .filter(|n| n.recipient_id == recipient_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn create(&self, notification: NewNotification) -> Result<Notification, DomainError> {
        let mut notifications = self.notifications.write().await;
        let id = notifications.len() as i64 + 1;
        let notification = notification.with_id(id);
        notifications.push(notification.clone());
        Ok(notification)
    }
}
