//! Public error types for the `schema-registry` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `SchemaRegistryApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaRegistryError {
    /// A type with the same name already exists.
    #[error("Type already exists: {0}")]
    AlreadyExists(String),

    /// The type definition is not acceptable (empty name, cyclic base chain, bad literal).
    #[error("Invalid type definition: {0}")]
    InvalidDefinition(String),

    /// A property value does not match the kind declared by the schema.
    #[error("Property '{property}' is declared as {declared}, got {actual}")]
    KindMismatch {
        property: String,
        declared: String,
        actual: String,
    },
}

impl SchemaRegistryError {
    /// Creates an `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(type_name: impl Into<String>) -> Self {
        Self::AlreadyExists(type_name.into())
    }

    /// Creates an `InvalidDefinition` error.
    #[must_use]
    pub fn invalid_definition(message: impl Into<String>) -> Self {
        Self::InvalidDefinition(message.into())
    }

    /// Returns `true` if this is an already exists error.
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// Returns `true` if this is an invalid definition error.
    #[must_use]
    pub const fn is_invalid_definition(&self) -> bool {
        matches!(self, Self::InvalidDefinition(_))
    }

    /// Returns `true` if this is a kind mismatch error.
    #[must_use]
    pub const fn is_kind_mismatch(&self) -> bool {
        matches!(self, Self::KindMismatch { .. })
    }
}
