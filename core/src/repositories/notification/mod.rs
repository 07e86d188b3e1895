mod r#trait;
pub use r#trait::NotificationRepository;

mod memory;
pub use memory::InMemoryNotificationRepository;
