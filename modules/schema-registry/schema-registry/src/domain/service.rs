//! Domain service for the Schema Registry module.

use std::collections::HashSet;
use std::sync::Arc;

use schema_registry_sdk::{PropertyDescriptor, TypeDescriptor};
use tracing::{debug, warn};

use super::error::DomainError;
use super::repo::{TypeLookup, TypeRepository};
use crate::config::{CyclePolicy, SchemaRegistryConfig};

/// Schema registry service.
///
/// Applies registration policy and resolves inherited property lists.
/// Storage is delegated to the repository.
pub struct SchemaRegistry {
    repo: Arc<dyn TypeRepository>,
    config: SchemaRegistryConfig,
}

impl SchemaRegistry {
    /// Creates a new `SchemaRegistry` with the given repository and config.
    #[must_use]
    pub fn new(repo: Arc<dyn TypeRepository>, config: SchemaRegistryConfig) -> Self {
        Self { repo, config }
    }

    /// Registers a type descriptor.
    ///
    /// Unknown base types are accepted; resolution stops where the chain
    /// leaves the registry. The registry is unchanged when an error is returned.
    ///
    /// # Errors
    ///
    /// - `InvalidTypeName` if the name is blank
    /// - `AlreadyExists` if the name is taken and redefinition is disabled
    /// - `CyclicInheritance` if the base chain leads back to the type and the
    ///   cycle policy is `reject`
    pub fn register_type(&self, descriptor: TypeDescriptor) -> Result<(), DomainError> {
        let type_name = descriptor.type_name.clone();
        if type_name.trim().is_empty() {
            return Err(DomainError::invalid_type_name(type_name));
        }

        let properties = descriptor.properties.len();
        let replaced = self
            .repo
            .insert_checked(descriptor, &|types, candidate| self.admit(types, candidate))?;

        if replaced.is_some() {
            debug!(type_name = %type_name, properties, "Replaced type descriptor");
        } else {
            debug!(type_name = %type_name, properties, "Registered type descriptor");
        }

        Ok(())
    }

    /// Registration policy, evaluated against the stored types while the
    /// repository holds its write lock.
    fn admit(
        &self,
        types: &dyn TypeLookup,
        descriptor: &TypeDescriptor,
    ) -> Result<(), DomainError> {
        let type_name = descriptor.type_name.as_str();

        if !self.config.allow_redefinition && types.contains(type_name) {
            return Err(DomainError::already_exists(type_name));
        }

        if let Some(chain) = find_cycle(types, descriptor) {
            match self.config.cycle_policy {
                CyclePolicy::Reject => {
                    return Err(DomainError::cyclic_inheritance(type_name, chain));
                }
                CyclePolicy::Truncate => {
                    warn!(
                        type_name = %type_name,
                        chain = %chain.join(" -> "),
                        "Registering type with cyclic base chain; resolution will be truncated"
                    );
                }
            }
        }

        if let Some(base) = descriptor.base_type_name.as_deref()
            && base != type_name
            && !types.contains(base)
        {
            debug!(type_name = %type_name, base = %base, "Base type is not registered");
        }

        Ok(())
    }

    /// Retrieves a registered descriptor.
    #[must_use]
    pub fn get_type(&self, type_name: &str) -> Option<TypeDescriptor> {
        self.repo.get(type_name)
    }

    /// Returns `true` if the type is registered.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.repo.contains(type_name)
    }

    /// Names of all registered types, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<String> {
        self.repo.type_names()
    }

    /// Resolves the full property list of a type, base-first.
    ///
    /// The root ancestor's properties come first, then each descendant's in
    /// declaration order. Redeclared names are not deduplicated. Entries that
    /// come from an ancestor carry `is_inherited = true`.
    ///
    /// Unknown types resolve to an empty list; an unknown base ends the chain.
    #[must_use]
    pub fn get_all_properties(&self, type_name: &str) -> Vec<PropertyDescriptor> {
        let lineage = self.lineage(type_name);

        lineage
            .iter()
            .enumerate()
            .rev()
            .flat_map(|(depth, descriptor)| {
                descriptor
                    .properties
                    .iter()
                    .map(move |p| p.clone().with_inherited(depth > 0))
            })
            .collect()
    }

    /// Base chain of a type, from its direct base up to the root.
    ///
    /// Stops at the first unknown or repeated name.
    #[must_use]
    pub fn ancestors(&self, type_name: &str) -> Vec<String> {
        self.lineage(type_name)
            .into_iter()
            .skip(1)
            .map(|d| d.type_name)
            .collect()
    }

    /// Registered types that name `type_name` as their direct base, sorted.
    #[must_use]
    pub fn direct_subtypes(&self, type_name: &str) -> Vec<String> {
        self.repo.subtypes_of(type_name)
    }

    /// Registered descriptors from `type_name` up its base chain, most derived first.
    fn lineage(&self, type_name: &str) -> Vec<TypeDescriptor> {
        let mut lineage: Vec<TypeDescriptor> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut next = Some(type_name.to_owned());

        while let Some(name) = next {
            if !seen.insert(name.clone()) {
                warn!(
                    type_name = %type_name,
                    repeated = %name,
                    "Cyclic base chain, truncating property resolution"
                );
                break;
            }

            let Some(descriptor) = self.repo.get(&name) else {
                if !lineage.is_empty() {
                    debug!(
                        type_name = %type_name,
                        missing = %name,
                        "Base type not registered, stopping resolution"
                    );
                }
                break;
            };

            next = descriptor.base_type_name.clone();
            lineage.push(descriptor);
        }

        lineage
    }
}

/// Returns the offending chain if registering `descriptor` would close a loop.
///
/// The descriptor is considered in place of any stored one with the same name.
fn find_cycle(types: &dyn TypeLookup, descriptor: &TypeDescriptor) -> Option<Vec<String>> {
    let mut chain = vec![descriptor.type_name.clone()];
    let mut seen: HashSet<String> = HashSet::new();
    let mut next = descriptor.base_type_name.clone();

    while let Some(name) = next {
        chain.push(name.clone());
        if name == descriptor.type_name {
            return Some(chain);
        }
        if !seen.insert(name.clone()) {
            return None;
        }
        next = types.base_of(&name);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryTypeRepository;
    use schema_registry_sdk::PropertyValue;
    use tracing_test::traced_test;

    fn create_registry(config: SchemaRegistryConfig) -> SchemaRegistry {
        SchemaRegistry::new(Arc::new(InMemoryTypeRepository::new()), config)
    }

    fn truncating() -> SchemaRegistryConfig {
        SchemaRegistryConfig {
            cycle_policy: CyclePolicy::Truncate,
            ..SchemaRegistryConfig::default()
        }
    }

    fn names(props: &[PropertyDescriptor]) -> Vec<&str> {
        props.iter().map(|p| p.name.as_str()).collect()
    }

    fn register_chain(registry: &SchemaRegistry) {
        registry
            .register_type(
                TypeDescriptor::new("A")
                    .with_property("a1", "int", 1)
                    .with_property("a2", "string", "a"),
            )
            .unwrap();
        registry
            .register_type(
                TypeDescriptor::new("B")
                    .with_base("A")
                    .with_property("b1", "bool", true),
            )
            .unwrap();
        registry
            .register_type(
                TypeDescriptor::new("C")
                    .with_base("B")
                    .with_property("c1", "double", 0.5)
                    .with_property("a1", "int", 99),
            )
            .unwrap();
    }

    #[test]
    fn test_resolution_is_base_first() {
        let registry = create_registry(SchemaRegistryConfig::default());
        register_chain(&registry);

        let props = registry.get_all_properties("C");
        assert_eq!(names(&props), vec!["a1", "a2", "b1", "c1", "a1"]);
        assert_eq!(props[0].default, PropertyValue::Int(1));
        assert_eq!(props[4].default, PropertyValue::Int(99));
    }

    #[test]
    fn test_inherited_flag_marks_ancestor_entries() {
        let registry = create_registry(SchemaRegistryConfig::default());
        register_chain(&registry);

        let flags: Vec<bool> = registry
            .get_all_properties("C")
            .iter()
            .map(|p| p.is_inherited)
            .collect();
        assert_eq!(flags, vec![true, true, true, false, false]);

        assert!(registry.get_all_properties("A").iter().all(|p| !p.is_inherited));
        assert!(
            registry
                .get_type("C")
                .unwrap()
                .properties
                .iter()
                .all(|p| !p.is_inherited)
        );
    }

    #[test]
    fn test_unknown_type_resolves_empty() {
        let registry = create_registry(SchemaRegistryConfig::default());
        assert!(registry.get_all_properties("Ghost").is_empty());
        assert!(registry.get_type("Ghost").is_none());
        assert!(registry.ancestors("Ghost").is_empty());
    }

    #[test]
    fn test_dangling_base_stops_resolution() {
        let registry = create_registry(SchemaRegistryConfig::default());
        registry
            .register_type(
                TypeDescriptor::new("Orphan")
                    .with_base("Missing")
                    .with_property("x", "int", 1),
            )
            .unwrap();

        assert_eq!(names(&registry.get_all_properties("Orphan")), vec!["x"]);
        assert!(registry.ancestors("Orphan").is_empty());

        // Registering the base later makes it visible to resolution.
        registry
            .register_type(TypeDescriptor::new("Missing").with_property("m", "bool", false))
            .unwrap();
        assert_eq!(names(&registry.get_all_properties("Orphan")), vec!["m", "x"]);
    }

    #[test]
    fn test_redefinition_replaces_by_default() {
        let registry = create_registry(SchemaRegistryConfig::default());
        registry
            .register_type(TypeDescriptor::new("T").with_property("old", "int", 1))
            .unwrap();
        registry
            .register_type(TypeDescriptor::new("T").with_property("new", "int", 2))
            .unwrap();

        assert_eq!(names(&registry.get_all_properties("T")), vec!["new"]);
        assert_eq!(registry.type_names(), vec!["T"]);
    }

    #[test]
    fn test_redefinition_rejected_when_disabled() {
        let registry = create_registry(SchemaRegistryConfig {
            allow_redefinition: false,
            ..SchemaRegistryConfig::default()
        });
        registry
            .register_type(TypeDescriptor::new("T").with_property("old", "int", 1))
            .unwrap();

        let result = registry.register_type(TypeDescriptor::new("T"));
        assert!(matches!(result, Err(DomainError::AlreadyExists(ref n)) if n == "T"));
        assert_eq!(names(&registry.get_all_properties("T")), vec!["old"]);
    }

    #[test]
    fn test_blank_type_name_rejected() {
        let registry = create_registry(SchemaRegistryConfig::default());
        assert!(matches!(
            registry.register_type(TypeDescriptor::new("  ")),
            Err(DomainError::InvalidTypeName(_))
        ));
        assert!(registry.type_names().is_empty());
    }

    #[test]
    fn test_self_base_rejected() {
        let registry = create_registry(SchemaRegistryConfig::default());
        let result = registry.register_type(TypeDescriptor::new("Loop").with_base("Loop"));

        match result {
            Err(DomainError::CyclicInheritance { type_name, chain }) => {
                assert_eq!(type_name, "Loop");
                assert_eq!(chain, vec!["Loop", "Loop"]);
            }
            other => panic!("Expected CyclicInheritance, got {other:?}"),
        }
        assert!(!registry.contains("Loop"));
    }

    #[test]
    fn test_transitive_cycle_rejected() {
        let registry = create_registry(SchemaRegistryConfig::default());
        registry
            .register_type(TypeDescriptor::new("A").with_base("B"))
            .unwrap();

        let result = registry.register_type(TypeDescriptor::new("B").with_base("A"));
        match result {
            Err(DomainError::CyclicInheritance { chain, .. }) => {
                assert_eq!(chain, vec!["B", "A", "B"]);
            }
            other => panic!("Expected CyclicInheritance, got {other:?}"),
        }
        assert!(!registry.contains("B"));
    }

    #[test]
    fn test_replacing_type_can_break_cycle_candidate() {
        let registry = create_registry(SchemaRegistryConfig::default());
        registry
            .register_type(TypeDescriptor::new("A").with_base("B"))
            .unwrap();
        registry.register_type(TypeDescriptor::new("B")).unwrap();

        // A re-registered without a base: B may now derive from A.
        registry.register_type(TypeDescriptor::new("A")).unwrap();
        registry
            .register_type(TypeDescriptor::new("B").with_base("A"))
            .unwrap();
        assert_eq!(registry.ancestors("B"), vec!["A"]);
    }

    #[test]
    fn test_concurrent_duplicates_admit_one_registration() {
        let registry = create_registry(SchemaRegistryConfig {
            allow_redefinition: false,
            ..SchemaRegistryConfig::default()
        });
        let registry = &registry;

        for round in 0..32 {
            let name = format!("T{round}");
            let name = name.as_str();

            let accepted = std::thread::scope(|s| {
                let handles: Vec<_> = (0..8)
                    .map(|i| {
                        s.spawn(move || {
                            registry
                                .register_type(
                                    TypeDescriptor::new(name).with_property("writer", "int", i),
                                )
                                .is_ok()
                        })
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().unwrap())
                    .filter(|ok| *ok)
                    .count()
            });

            assert_eq!(accepted, 1, "round {round}");
        }
    }

    #[test]
    fn test_concurrent_opposite_bases_never_form_cycle() {
        for _ in 0..32 {
            let registry = create_registry(SchemaRegistryConfig::default());
            let registry = &registry;

            let (a, b) = std::thread::scope(|s| {
                let a = s.spawn(move || {
                    registry
                        .register_type(TypeDescriptor::new("A").with_base("B"))
                        .is_ok()
                });
                let b = s.spawn(move || {
                    registry
                        .register_type(TypeDescriptor::new("B").with_base("A"))
                        .is_ok()
                });
                (a.join().unwrap(), b.join().unwrap())
            });

            assert_ne!(a, b, "exactly one side of the loop is registered");
            assert_eq!(registry.type_names().len(), 1);
        }
    }

    #[test]
    #[traced_test]
    fn test_truncate_policy_terminates_resolution() {
        let registry = create_registry(truncating());
        registry
            .register_type(TypeDescriptor::new("A").with_base("B").with_property("a", "int", 1))
            .unwrap();
        registry
            .register_type(TypeDescriptor::new("B").with_base("A").with_property("b", "int", 2))
            .unwrap();
        assert!(logs_contain("cyclic base chain"));

        assert_eq!(names(&registry.get_all_properties("A")), vec!["b", "a"]);
        assert_eq!(names(&registry.get_all_properties("B")), vec!["a", "b"]);
        assert_eq!(registry.ancestors("A"), vec!["B"]);
        assert!(logs_contain("truncating property resolution"));
    }

    #[test]
    #[traced_test]
    fn test_truncate_policy_self_base() {
        let registry = create_registry(truncating());
        registry
            .register_type(TypeDescriptor::new("Me").with_base("Me").with_property("x", "int", 0))
            .unwrap();

        assert_eq!(names(&registry.get_all_properties("Me")), vec!["x"]);
        assert!(logs_contain("truncating property resolution"));
    }

    #[test]
    fn test_direct_subtypes_follow_replacements() {
        let registry = create_registry(SchemaRegistryConfig::default());
        register_chain(&registry);
        registry
            .register_type(TypeDescriptor::new("D").with_base("A"))
            .unwrap();

        assert_eq!(registry.direct_subtypes("A"), vec!["B", "D"]);
        assert_eq!(registry.direct_subtypes("B"), vec!["C"]);
        assert!(registry.direct_subtypes("C").is_empty());

        registry.register_type(TypeDescriptor::new("D")).unwrap();
        assert_eq!(registry.direct_subtypes("A"), vec!["B"]);
    }

    #[test]
    fn test_ancestors_order() {
        let registry = create_registry(SchemaRegistryConfig::default());
        register_chain(&registry);

        assert_eq!(registry.ancestors("C"), vec!["B", "A"]);
        assert!(registry.ancestors("A").is_empty());
    }
}
