//! Public models for the `schema-registry` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `schema-registry` module and its consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The primitive kind carried by a non-empty [`PropertyValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Signed 64-bit integer (declared as `int`).
    #[serde(rename = "int")]
    Int,
    /// 64-bit floating point (declared as `double`).
    #[serde(rename = "double")]
    Float,
    /// UTF-8 text (declared as `string`).
    #[serde(rename = "string")]
    Text,
    /// Boolean (declared as `bool`).
    #[serde(rename = "bool")]
    Bool,
}

impl PropertyKind {
    /// Maps a declared type label to its primitive kind.
    ///
    /// Any label other than `int`, `double`, `string` and `bool` is a logical
    /// type name and has no primitive kind.
    #[must_use]
    pub fn from_declared_type(declared_type: &str) -> Option<Self> {
        match declared_type {
            "int" => Some(Self::Int),
            "double" => Some(Self::Float),
            "string" => Some(Self::Text),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    /// Returns the canonical declared type label for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "double",
            Self::Text => "string",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value.
///
/// `Empty` is the placeholder used when neither a default nor an explicit
/// value has been provided. It is not the same as a zero of any kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl PropertyValue {
    /// Returns the kind of this value, or `None` for `Empty`.
    #[must_use]
    pub const fn kind(&self) -> Option<PropertyKind> {
        match self {
            Self::Empty => None,
            Self::Int(_) => Some(PropertyKind::Int),
            Self::Float(_) => Some(PropertyKind::Float),
            Self::Text(_) => Some(PropertyKind::Text),
            Self::Bool(_) => Some(PropertyKind::Bool),
        }
    }

    /// Returns `true` for the `Empty` sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Runtime type label of the held value (`empty` for the sentinel).
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.as_str(),
            None => "empty",
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("<empty>"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "\"{v}\""),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

/// Typed extraction from a [`PropertyValue`].
///
/// Extraction succeeds only when the value's kind matches the requested type
/// exactly; there is no numeric widening or string conversion.
pub trait FromPropertyValue: Sized {
    fn from_property_value(value: &PropertyValue) -> Option<Self>;
}

impl FromPropertyValue for i64 {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_int()
    }
}

impl FromPropertyValue for f64 {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromPropertyValue for String {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_text().map(ToOwned::to_owned)
    }
}

impl FromPropertyValue for bool {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_bool()
    }
}

/// Static description of one property of a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name, unique only by convention within one type.
    pub name: String,

    /// Declared type label (`int`, `double`, `string`, `bool`, or any logical
    /// type name). Not validated against `default`.
    pub declared_type: String,

    /// Default value copied into every new object of the type.
    pub default: PropertyValue,

    /// Set on entries of a resolved property list that come from an ancestor.
    #[serde(default)]
    pub is_inherited: bool,
}

impl PropertyDescriptor {
    /// Creates a new, non-inherited property descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        default: impl Into<PropertyValue>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            default: default.into(),
            is_inherited: false,
        }
    }

    /// Returns a copy of this descriptor with the inherited flag set to `inherited`.
    #[must_use]
    pub fn with_inherited(mut self, inherited: bool) -> Self {
        self.is_inherited = inherited;
        self
    }

    /// Primitive kind implied by the declared type label, if any.
    #[must_use]
    pub fn declared_kind(&self) -> Option<PropertyKind> {
        PropertyKind::from_declared_type(&self.declared_type)
    }
}

/// A named schema: its own properties plus at most one base type.
///
/// # Example
///
/// ```
/// use schema_registry_sdk::TypeDescriptor;
///
/// let player = TypeDescriptor::new("Player")
///     .with_base("Entity")
///     .with_property("level", "int", 1)
///     .with_property("health", "double", 100.0);
///
/// assert_eq!(player.base_type_name.as_deref(), Some("Entity"));
/// assert_eq!(player.properties.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Unique key of the type within a registry.
    pub type_name: String,

    /// Name of the base type, if any. Not required to be registered.
    pub base_type_name: Option<String>,

    /// Own properties in declaration order.
    pub properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Creates a new type descriptor with no base and no properties.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            base_type_name: None,
            properties: Vec::new(),
        }
    }

    /// Sets the base type. A blank name clears it.
    #[must_use]
    pub fn with_base(mut self, base_type_name: impl Into<String>) -> Self {
        self.set_base_type(base_type_name);
        self
    }

    /// Sets the base type in place. A blank name clears it.
    pub fn set_base_type(&mut self, base_type_name: impl Into<String>) {
        let base: String = base_type_name.into();
        let base = base.trim();
        self.base_type_name = if base.is_empty() {
            None
        } else {
            Some(base.to_owned())
        };
    }

    /// Appends a property declaration.
    pub fn add_property(
        &mut self,
        name: impl Into<String>,
        declared_type: impl Into<String>,
        default: impl Into<PropertyValue>,
    ) {
        self.properties
            .push(PropertyDescriptor::new(name, declared_type, default));
    }

    /// Appends a property declaration, builder style.
    #[must_use]
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        declared_type: impl Into<String>,
        default: impl Into<PropertyValue>,
    ) -> Self {
        self.add_property(name, declared_type, default);
        self
    }
}
