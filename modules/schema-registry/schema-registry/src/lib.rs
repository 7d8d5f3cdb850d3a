//! Schema Registry Module Implementation
//!
//! This module provides type registration, single-inheritance property
//! resolution, dynamic objects built from resolved schemas, and a line-based
//! schema text front end. The public API is defined in `schema-registry-sdk`
//! and re-exported here.
//!
//! ## Architecture
//!
//! - **Explicit registry value**: no process-wide state; the registry is
//!   injected into objects and the factory as `dyn SchemaRegistryApi`
//! - **Base-first resolution**: ancestors' properties come first, derived
//!   declarations shadow them when an object is materialized
//! - **Structural compatibility**: `is_type` matches by property name and
//!   declared type, not by ancestry

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use schema_registry_sdk::{
    FromPropertyValue, PropertyDescriptor, PropertyKind, PropertyValue, SchemaRegistryApi,
    SchemaRegistryError, TypeDescriptor,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::SchemaRegistryModule;

// === CONFIGURATION ===
pub mod config;

// === LOCAL CLIENT ===
pub mod local_client;
pub use local_client::SchemaRegistryLocalClient;

// === DOMAIN TYPES ===
pub use domain::{DynamicObject, ObjectFactory, SchemaRegistry};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
