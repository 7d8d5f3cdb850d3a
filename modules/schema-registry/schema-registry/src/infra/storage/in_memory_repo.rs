//! In-memory repository implementation.

use std::collections::HashMap;

use parking_lot::RwLock;
use schema_registry_sdk::TypeDescriptor;

use crate::domain::error::DomainError;
use crate::domain::repo::{InsertCheck, TypeLookup, TypeRepository};

#[derive(Default)]
struct RepoState {
    /// Descriptors keyed by type name.
    types: HashMap<String, TypeDescriptor>,
    /// Inheritance edges: type name -> base type name.
    inheritance: HashMap<String, String>,
}

/// In-memory repository for type descriptors.
///
/// Descriptors and inheritance edges are kept under one lock so an insert
/// updates both atomically.
#[derive(Default)]
pub struct InMemoryTypeRepository {
    state: RwLock<RepoState>,
}

impl InMemoryTypeRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TypeLookup for RepoState {
    fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    fn base_of(&self, type_name: &str) -> Option<String> {
        self.inheritance.get(type_name).cloned()
    }
}

impl TypeRepository for InMemoryTypeRepository {
    fn insert_checked(
        &self,
        descriptor: TypeDescriptor,
        check: &InsertCheck<'_>,
    ) -> Result<Option<TypeDescriptor>, DomainError> {
        let mut state = self.state.write();
        let types: &dyn TypeLookup = &*state;
        check(types, &descriptor)?;

        match descriptor.base_type_name.as_deref() {
            Some(base) => {
                state
                    .inheritance
                    .insert(descriptor.type_name.clone(), base.to_owned());
            }
            None => {
                state.inheritance.remove(&descriptor.type_name);
            }
        }

        Ok(state
            .types
            .insert(descriptor.type_name.clone(), descriptor))
    }

    fn get(&self, type_name: &str) -> Option<TypeDescriptor> {
        self.state.read().types.get(type_name).cloned()
    }

    fn contains(&self, type_name: &str) -> bool {
        self.state.read().contains(type_name)
    }

    fn subtypes_of(&self, base_type_name: &str) -> Vec<String> {
        let state = self.state.read();
        let mut names: Vec<String> = state
            .inheritance
            .iter()
            .filter(|(_, base)| base.as_str() == base_type_name)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().types.keys().cloned().collect();
        names.sort();
        names
    }
}
