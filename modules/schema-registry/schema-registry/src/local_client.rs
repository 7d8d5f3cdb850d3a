//! Local client implementing the `SchemaRegistryApi` trait.

use std::sync::Arc;

use schema_registry_sdk::{
    PropertyDescriptor, SchemaRegistryApi, SchemaRegistryError, TypeDescriptor,
};

use crate::domain::service::SchemaRegistry;

/// Local client for the Schema Registry module.
///
/// This client implements the `SchemaRegistryApi` trait and delegates
/// to the domain service, converting domain errors at the boundary.
pub struct SchemaRegistryLocalClient {
    service: Arc<SchemaRegistry>,
}

impl SchemaRegistryLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<SchemaRegistry>) -> Self {
        Self { service }
    }
}

impl SchemaRegistryApi for SchemaRegistryLocalClient {
    fn register_type(&self, descriptor: TypeDescriptor) -> Result<(), SchemaRegistryError> {
        self.service
            .register_type(descriptor)
            .map_err(SchemaRegistryError::from)
    }

    fn get_type(&self, type_name: &str) -> Option<TypeDescriptor> {
        self.service.get_type(type_name)
    }

    fn get_all_properties(&self, type_name: &str) -> Vec<PropertyDescriptor> {
        self.service.get_all_properties(type_name)
    }

    fn contains(&self, type_name: &str) -> bool {
        self.service.contains(type_name)
    }

    fn type_names(&self) -> Vec<String> {
        self.service.type_names()
    }
}
