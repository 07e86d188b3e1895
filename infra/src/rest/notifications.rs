use async_trait::async_trait;

use rf_core::domain::entities::{NewNotification, Notification};
use rf_core::errors::DomainError;
use rf_core::repositories::NotificationRepository;

use super::StoreClient;

/// Posts notifications to the store's `/notifications` collection
pub struct RestNotificationRepository {
    client: StoreClient,
}

impl RestNotificationRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationRepository for RestNotificationRepository {
    async fn create(&self, notification: NewNotification) -> Result<Notification, DomainError> {
        Ok(self.client.post("/notifications", &notification).await?)
    }
}
