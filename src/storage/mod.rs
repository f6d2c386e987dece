//! Persistence: the Repository contract and its backends

pub mod manager;
pub mod memory;
pub mod repository;

pub use manager::StorageManager;
pub use memory::InMemoryRepository;
pub use repository::{FileRepository, Repository};
