//! Property repository module.

mod r#trait;
pub use r#trait::PropertyRepository;

mod memory;
pub use memory::InMemoryPropertyRepository;
