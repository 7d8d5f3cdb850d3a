#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for schema-registry integration tests

use schema_registry::config::SchemaRegistryConfig;
use schema_registry::{SchemaRegistryModule, TypeDescriptor};

pub fn create_module() -> SchemaRegistryModule {
    SchemaRegistryModule::new(SchemaRegistryConfig::default())
}

/// `Entity{id:int, name:string}` and `Player: Entity{level:int, health:double}`.
pub fn create_game_module() -> SchemaRegistryModule {
    let module = create_module();
    let registry = module.service();

    registry
        .register_type(
            TypeDescriptor::new("Entity")
                .with_property("id", "int", 0)
                .with_property("name", "string", ""),
        )
        .unwrap();
    registry
        .register_type(
            TypeDescriptor::new("Player")
                .with_base("Entity")
                .with_property("level", "int", 1)
                .with_property("health", "double", 100.0),
        )
        .unwrap();

    module
}
