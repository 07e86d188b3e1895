//! User repository module.

mod r#trait;
pub use r#trait::UserRepository;

mod memory;
pub use memory::InMemoryUserRepository;
