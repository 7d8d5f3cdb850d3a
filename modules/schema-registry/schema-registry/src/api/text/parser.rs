//! Line-oriented schema text parser.
//!
//! ```text
//! TypeName[: BaseTypeName]
//! propName: declaredType[= defaultLiteral]
//! ```
//!
//! Blank lines are skipped. The header and each property line are split on
//! the first `:`, property types on the first `=`. There is no escaping.

use schema_registry_sdk::{PropertyKind, PropertyValue, TypeDescriptor};

use crate::domain::error::ParseError;

/// Parses schema text into a type descriptor.
///
/// Returns `Ok(None)` when the text has no non-blank line or the header names
/// no type. Property lines without `:` or with an empty name are skipped. A
/// property without `= literal` defaults to `PropertyValue::Empty`.
///
/// # Errors
///
/// Returns `ParseError` if a default literal for an `int` or `double`
/// property is not a valid number.
pub fn parse_schema(text: &str) -> Result<Option<TypeDescriptor>, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header)) = lines.next() else {
        return Ok(None);
    };

    let (type_name, base) = match header.split_once(':') {
        Some((name, base)) => (name.trim(), Some(base)),
        None => (header.trim(), None),
    };
    if type_name.is_empty() {
        return Ok(None);
    }

    let mut descriptor = TypeDescriptor::new(type_name);
    if let Some(base) = base {
        descriptor.set_base_type(base);
    }

    for (line_no, line) in lines {
        let Some((name, rest)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let (declared_type, default) = match rest.split_once('=') {
            Some((declared_type, literal)) => {
                let declared_type = declared_type.trim();
                let default = parse_default(line_no, name, declared_type, literal.trim())?;
                (declared_type, default)
            }
            None => (rest.trim(), PropertyValue::Empty),
        };

        descriptor.add_property(name, declared_type, default);
    }

    Ok(Some(descriptor))
}

/// Converts a default literal according to the declared type label.
fn parse_default(
    line: usize,
    property: &str,
    declared_type: &str,
    literal: &str,
) -> Result<PropertyValue, ParseError> {
    let value = match PropertyKind::from_declared_type(declared_type) {
        Some(PropertyKind::Int) => {
            let v = literal.parse::<i64>().map_err(|source| ParseError::InvalidInt {
                line,
                property: property.to_owned(),
                literal: literal.to_owned(),
                source,
            })?;
            PropertyValue::Int(v)
        }
        Some(PropertyKind::Float) => {
            let v = literal
                .parse::<f64>()
                .map_err(|source| ParseError::InvalidFloat {
                    line,
                    property: property.to_owned(),
                    literal: literal.to_owned(),
                    source,
                })?;
            PropertyValue::Float(v)
        }
        Some(PropertyKind::Bool) => PropertyValue::Bool(literal == "true" || literal == "1"),
        Some(PropertyKind::Text) | None => PropertyValue::Text(literal.to_owned()),
    };

    Ok(value)
}
