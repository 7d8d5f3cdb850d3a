//! Infrastructure layer for the Schema Registry module.
//!
//! Contains storage implementations.

pub mod storage;

pub use storage::InMemoryTypeRepository;
