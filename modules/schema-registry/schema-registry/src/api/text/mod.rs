//! Schema text front end.
//!
//! Turns the line-oriented schema format into type descriptors and feeds
//! them to the registry.

mod parser;

pub use parser::parse_schema;

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::service::SchemaRegistry;

/// Parses `text` and registers the resulting type.
///
/// Returns the registered type name, or `None` if the text has no usable
/// header. Nothing is registered when parsing fails.
///
/// # Errors
///
/// Returns `DomainError::Parse` for malformed numeric defaults, or any error
/// `SchemaRegistry::register_type` reports.
pub fn register_schema_text(
    registry: &SchemaRegistry,
    text: &str,
) -> Result<Option<String>, DomainError> {
    let Some(descriptor) = parse_schema(text)? else {
        debug!("Schema text has no type header, nothing to register");
        return Ok(None);
    };

    let type_name = descriptor.type_name.clone();
    registry.register_type(descriptor)?;
    Ok(Some(type_name))
}
