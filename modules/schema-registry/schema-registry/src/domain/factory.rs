//! Validating constructor for dynamic objects.

use std::sync::Arc;

use schema_registry_sdk::SchemaRegistryApi;
use tracing::debug;

use super::object::DynamicObject;

/// Creates dynamic objects for registered types only.
#[derive(Clone)]
pub struct ObjectFactory {
    registry: Arc<dyn SchemaRegistryApi>,
}

impl ObjectFactory {
    #[must_use]
    pub fn new(registry: Arc<dyn SchemaRegistryApi>) -> Self {
        Self { registry }
    }

    /// Registry used to resolve schemas.
    #[must_use]
    pub fn registry(&self) -> &Arc<dyn SchemaRegistryApi> {
        &self.registry
    }

    /// Creates an object of `type_name`, or `None` if the type is not registered.
    #[must_use]
    pub fn create(&self, type_name: &str) -> Option<DynamicObject> {
        if !self.registry.contains(type_name) {
            debug!(type_name = %type_name, "Cannot create object of unregistered type");
            return None;
        }

        Some(DynamicObject::new(self.registry.as_ref(), type_name))
    }

    /// Structural check of `object` against `target` using this factory's registry.
    #[must_use]
    pub fn is_type(&self, object: &DynamicObject, target: &str) -> bool {
        object.is_type(self.registry.as_ref(), target)
    }
}
