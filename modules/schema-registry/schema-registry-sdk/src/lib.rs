//! Schema Registry SDK
//!
//! This crate provides the public API for the `schema-registry` module:
//! - `SchemaRegistryApi` trait consumed by dynamic objects and the object factory
//! - `TypeDescriptor` and `PropertyDescriptor` models describing named schemas
//! - `PropertyValue` and `PropertyKind` for the closed set of primitive values
//! - `SchemaRegistryError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use schema_registry_sdk::{SchemaRegistryApi, TypeDescriptor};
//!
//! let entity = TypeDescriptor::new("Entity")
//!     .with_property("id", "int", 0)
//!     .with_property("name", "string", "");
//! client.register_type(entity)?;
//!
//! let player = TypeDescriptor::new("Player")
//!     .with_base("Entity")
//!     .with_property("level", "int", 1);
//! client.register_type(player)?;
//!
//! // Base-first: id, name, level
//! let props = client.get_all_properties("Player");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::SchemaRegistryApi;
pub use error::SchemaRegistryError;
pub use models::{
    FromPropertyValue, PropertyDescriptor, PropertyKind, PropertyValue, TypeDescriptor,
};
