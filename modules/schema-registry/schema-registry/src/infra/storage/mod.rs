//! Storage implementations for the Schema Registry module.

mod in_memory_repo;

pub use in_memory_repo::InMemoryTypeRepository;
