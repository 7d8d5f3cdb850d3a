//! Repository trait for type descriptor storage.

use schema_registry_sdk::TypeDescriptor;

use super::error::DomainError;

/// Read view of the stored types, handed to registration checks.
pub trait TypeLookup {
    /// Checks if a descriptor with the given type name exists.
    fn contains(&self, type_name: &str) -> bool;

    /// Returns the recorded base of a registered type.
    ///
    /// `None` both for unknown types and for types without a base.
    fn base_of(&self, type_name: &str) -> Option<String>;
}

/// Check run against the stored types before a descriptor is inserted.
pub type InsertCheck<'a> =
    dyn Fn(&dyn TypeLookup, &TypeDescriptor) -> Result<(), DomainError> + 'a;

/// Repository trait for type descriptor storage operations.
///
/// This trait defines the storage interface used by the domain service.
/// Registration policy (cycles, redefinition) lives in the service and is
/// passed in as an `InsertCheck`; the repository only stores descriptors and
/// the inheritance edges derived from them.
pub trait TypeRepository: Send + Sync {
    /// Runs `check` and, if it passes, stores the descriptor under its type
    /// name, replacing any previous one.
    ///
    /// The check and the insert happen under one write lock, so no other
    /// insert can land between them. Also records the
    /// `type_name -> base_type_name` edge, dropping the edge of a replaced
    /// descriptor.
    ///
    /// Returns the replaced descriptor, if any.
    ///
    /// # Errors
    ///
    /// Returns whatever `check` returns; nothing is stored in that case.
    fn insert_checked(
        &self,
        descriptor: TypeDescriptor,
        check: &InsertCheck<'_>,
    ) -> Result<Option<TypeDescriptor>, DomainError>;

    /// Retrieves a descriptor by its type name.
    fn get(&self, type_name: &str) -> Option<TypeDescriptor>;

    /// Checks if a descriptor with the given type name exists.
    fn contains(&self, type_name: &str) -> bool;

    /// Names of registered types whose base is `base_type_name`, sorted.
    fn subtypes_of(&self, base_type_name: &str) -> Vec<String>;

    /// Names of all registered types, sorted.
    fn type_names(&self) -> Vec<String>;
}
