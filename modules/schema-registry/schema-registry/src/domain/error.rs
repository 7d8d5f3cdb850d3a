//! Domain error types for the Schema Registry module.

use std::num::{ParseFloatError, ParseIntError};

use schema_registry_sdk::{PropertyKind, SchemaRegistryError};
use thiserror::Error;

/// Failure to turn schema text into a type descriptor.
///
/// Line numbers are 1-based and count blank lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A default literal for an `int` property is not an integer.
    #[error("line {line}: invalid int default for '{property}': {literal:?}")]
    InvalidInt {
        line: usize,
        property: String,
        literal: String,
        #[source]
        source: ParseIntError,
    },

    /// A default literal for a `double` property is not a number.
    #[error("line {line}: invalid double default for '{property}': {literal:?}")]
    InvalidFloat {
        line: usize,
        property: String,
        literal: String,
        #[source]
        source: ParseFloatError,
    },
}

impl ParseError {
    /// Line of the offending property declaration.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidInt { line, .. } | Self::InvalidFloat { line, .. } => *line,
        }
    }

    /// Name of the offending property.
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::InvalidInt { property, .. } | Self::InvalidFloat { property, .. } => property,
        }
    }
}

/// Domain-level errors for the Schema Registry module.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The type name is empty.
    #[error("Invalid type name: {0:?}")]
    InvalidTypeName(String),

    /// A type with the same name exists and redefinition is disabled.
    #[error("Type already exists: {0}")]
    AlreadyExists(String),

    /// The base chain of the type loops back to the type itself.
    #[error("Cyclic inheritance for {type_name}: {}", .chain.join(" -> "))]
    CyclicInheritance {
        type_name: String,
        chain: Vec<String>,
    },

    /// A checked property write does not match the declared primitive kind.
    #[error("Property '{property}' is declared as {declared}, got {actual}")]
    KindMismatch {
        property: String,
        declared: PropertyKind,
        actual: PropertyKind,
    },

    /// Schema text could not be parsed.
    #[error("Schema text parse failed: {0}")]
    Parse(#[from] ParseError),
}

impl DomainError {
    /// Creates an `InvalidTypeName` error.
    #[must_use]
    pub fn invalid_type_name(type_name: impl Into<String>) -> Self {
        Self::InvalidTypeName(type_name.into())
    }

    /// Creates an `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(type_name: impl Into<String>) -> Self {
        Self::AlreadyExists(type_name.into())
    }

    /// Creates a `CyclicInheritance` error.
    #[must_use]
    pub fn cyclic_inheritance(type_name: impl Into<String>, chain: Vec<String>) -> Self {
        Self::CyclicInheritance {
            type_name: type_name.into(),
            chain,
        }
    }
}

impl From<DomainError> for SchemaRegistryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::AlreadyExists(name) => SchemaRegistryError::already_exists(name),
            DomainError::KindMismatch {
                property,
                declared,
                actual,
            } => SchemaRegistryError::KindMismatch {
                property,
                declared: declared.as_str().to_owned(),
                actual: actual.as_str().to_owned(),
            },
            e @ (DomainError::InvalidTypeName(_)
            | DomainError::CyclicInheritance { .. }
            | DomainError::Parse(_)) => SchemaRegistryError::invalid_definition(e.to_string()),
        }
    }
}
