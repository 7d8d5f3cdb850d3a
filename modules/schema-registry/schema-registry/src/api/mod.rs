//! Front ends for the Schema Registry module.

pub mod text;
