//! Domain layer for the Schema Registry module.
//!
//! Contains the registry service, dynamic objects, the object factory,
//! error types, and the repository trait.

pub mod error;
pub mod factory;
pub mod object;
pub mod repo;
pub mod service;

pub use error::{DomainError, ParseError};
pub use factory::ObjectFactory;
pub use object::DynamicObject;
pub use repo::{InsertCheck, TypeLookup, TypeRepository};
pub use service::SchemaRegistry;
