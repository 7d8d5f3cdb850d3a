//! `SchemaRegistryApi` trait definition.
//!
//! This trait defines the public API for the `schema-registry` module.
//! Dynamic objects and the object factory only ever see the registry
//! through this trait, so any implementation can be injected.

use crate::error::SchemaRegistryError;
use crate::models::{PropertyDescriptor, TypeDescriptor};

/// Public API trait for the `schema-registry` module.
///
/// ```ignore
/// let registry: Arc<dyn SchemaRegistryApi> = module.client();
/// registry.register_type(TypeDescriptor::new("Entity").with_property("id", "int", 0))?;
/// assert!(registry.contains("Entity"));
/// ```
pub trait SchemaRegistryApi: Send + Sync {
    /// Register a type descriptor, replacing any previous descriptor with the
    /// same name when the registry allows redefinition.
    ///
    /// # Errors
    ///
    /// * `AlreadyExists` - If the name is taken and redefinition is disabled
    /// * `InvalidDefinition` - If the name is empty or the base chain is cyclic
    fn register_type(&self, descriptor: TypeDescriptor) -> Result<(), SchemaRegistryError>;

    /// Retrieve a registered descriptor by name. Unknown names yield `None`.
    fn get_type(&self, type_name: &str) -> Option<TypeDescriptor>;

    /// Resolve the full, base-first property list of a type.
    ///
    /// Unknown types resolve to an empty list. Properties redeclared by a
    /// derived type appear twice, the derived entry last.
    fn get_all_properties(&self, type_name: &str) -> Vec<PropertyDescriptor>;

    /// Returns `true` if a type with the given name is registered.
    fn contains(&self, type_name: &str) -> bool {
        self.get_type(type_name).is_some()
    }

    /// Names of all registered types, sorted.
    fn type_names(&self) -> Vec<String>;
}
