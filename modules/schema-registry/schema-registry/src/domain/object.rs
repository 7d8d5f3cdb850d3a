//! Dynamic objects backed by a resolved schema.

use std::collections::{HashMap, HashSet};

use schema_registry_sdk::{FromPropertyValue, PropertyKind, PropertyValue, SchemaRegistryApi};
use tracing::trace;

use super::error::DomainError;

/// An instance of a named type.
///
/// The property bag is a snapshot of the type's resolved schema taken at
/// construction; later registry changes do not affect existing objects.
/// After construction the bag may hold keys the schema never declared.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicObject {
    type_name: String,
    properties: HashMap<String, PropertyValue>,
    /// Primitive kind per resolved property name (last declaration wins).
    /// Names declared with a logical type label are absent.
    declared_kinds: HashMap<String, PropertyKind>,
}

impl DynamicObject {
    /// Materializes an object of `type_name` from the registry's resolved schema.
    ///
    /// Defaults are applied in resolution order, so a derived redeclaration
    /// overrides its ancestor's default. No existence check is made: an unknown
    /// type yields an object with an empty bag.
    #[must_use]
    pub fn new(registry: &dyn SchemaRegistryApi, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let resolved = registry.get_all_properties(&type_name);

        let mut properties = HashMap::with_capacity(resolved.len());
        let mut declared_kinds = HashMap::with_capacity(resolved.len());
        for descriptor in resolved {
            match descriptor.declared_kind() {
                Some(kind) => declared_kinds.insert(descriptor.name.clone(), kind),
                None => declared_kinds.remove(&descriptor.name),
            };
            properties.insert(descriptor.name, descriptor.default);
        }

        Self {
            type_name,
            properties,
            declared_kinds,
        }
    }

    /// Name of the type this object was built from.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Inserts or overwrites a property without any kind check.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Inserts or overwrites a property, refusing kind drift on declared
    /// primitive properties.
    ///
    /// Undeclared names, logical type labels and `Empty` values are accepted.
    ///
    /// # Errors
    ///
    /// Returns `KindMismatch` if the property was declared as `int`, `double`,
    /// `string` or `bool` and the value is of another kind. The object is left
    /// unchanged.
    pub fn try_set_property(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), DomainError> {
        let value = value.into();

        let declared = self.declared_kinds.get(name).copied();
        if let (Some(declared), Some(actual)) = (declared, value.kind())
            && declared != actual
        {
            return Err(DomainError::KindMismatch {
                property: name.to_owned(),
                declared,
                actual,
            });
        }

        self.properties.insert(name.to_owned(), value);
        Ok(())
    }

    /// Returns the property as `T` if it exists and holds exactly that kind.
    #[must_use]
    pub fn get_property<T: FromPropertyValue>(&self, name: &str) -> Option<T> {
        self.properties.get(name).and_then(T::from_property_value)
    }

    /// Returns the raw value, or `Empty` if the property is absent.
    #[must_use]
    pub fn get_property_variant(&self, name: &str) -> PropertyValue {
        self.properties.get(name).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Names of all properties currently held. Order is unspecified.
    #[must_use]
    pub fn get_property_names(&self) -> HashSet<String> {
        self.properties.keys().cloned().collect()
    }

    /// Iterates over the property bag. Order is unspecified.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Structural compatibility check.
    ///
    /// True if `target` is this object's own type name. Otherwise every
    /// property of the target's resolved schema must appear in this object's
    /// resolved schema with the same name and declared type label, and the
    /// target schema must not be empty: a type that resolves to no properties
    /// (unknown or marker types) is never satisfied structurally.
    #[must_use]
    pub fn is_type(&self, registry: &dyn SchemaRegistryApi, target: &str) -> bool {
        if self.type_name == target {
            return true;
        }

        let own = registry.get_all_properties(&self.type_name);
        let wanted = registry.get_all_properties(target);

        let compatible = !wanted.is_empty()
            && wanted.iter().all(|w| {
                own.iter()
                    .any(|o| o.name == w.name && o.declared_type == w.declared_type)
            });

        trace!(
            object_type = %self.type_name,
            target = %target,
            compatible,
            "Structural type check"
        );
        compatible
    }
}
