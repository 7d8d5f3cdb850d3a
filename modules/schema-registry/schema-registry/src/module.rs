//! Module declaration for the Schema Registry module.

use std::path::Path;
use std::sync::Arc;

use schema_registry_sdk::SchemaRegistryApi;
use tracing::{debug, info};

use crate::config::{ConfigError, SchemaRegistryConfig};
use crate::domain::error::DomainError;
use crate::domain::factory::ObjectFactory;
use crate::domain::service::SchemaRegistry;
use crate::infra::InMemoryTypeRepository;
use crate::local_client::SchemaRegistryLocalClient;

/// Schema Registry module.
///
/// Owns one registry and hands out the pieces built around it: the domain
/// service, the `SchemaRegistryApi` client and an object factory bound to
/// that client.
#[derive(Clone)]
pub struct SchemaRegistryModule {
    service: Arc<SchemaRegistry>,
    client: Arc<dyn SchemaRegistryApi>,
    factory: ObjectFactory,
}

impl SchemaRegistryModule {
    /// Wires an in-memory registry with the given configuration.
    #[must_use]
    pub fn new(cfg: SchemaRegistryConfig) -> Self {
        info!("Initializing schema_registry module");
        debug!(
            "Loaded schema_registry config: cycle_policy={:?}, allow_redefinition={}",
            cfg.cycle_policy, cfg.allow_redefinition
        );

        let repo = Arc::new(InMemoryTypeRepository::new());
        let service = Arc::new(SchemaRegistry::new(repo, cfg));

        let client: Arc<dyn SchemaRegistryApi> =
            Arc::new(SchemaRegistryLocalClient::new(Arc::clone(&service)));
        let factory = ObjectFactory::new(Arc::clone(&client));

        info!("Schema registry module initialized");
        Self {
            service,
            client,
            factory,
        }
    }

    /// Loads configuration (defaults, optional YAML file, environment) and wires the module.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration cannot be loaded, including
    /// when `path` names a file that does not exist.
    pub fn from_config_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        let cfg = SchemaRegistryConfig::load(path)?;
        Ok(Self::new(cfg))
    }

    /// The domain service.
    #[must_use]
    pub fn service(&self) -> &Arc<SchemaRegistry> {
        &self.service
    }

    /// The registry as seen by consumers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn SchemaRegistryApi> {
        Arc::clone(&self.client)
    }

    /// Object factory bound to this module's registry.
    #[must_use]
    pub fn factory(&self) -> &ObjectFactory {
        &self.factory
    }

    /// Parses schema text and registers the type it defines.
    ///
    /// # Errors
    /// Returns `DomainError::Parse` for malformed defaults, or a registration error.
    pub fn register_schema_text(&self, text: &str) -> Result<Option<String>, DomainError> {
        crate::api::text::register_schema_text(&self.service, text)
    }
}

impl Default for SchemaRegistryModule {
    fn default() -> Self {
        Self::new(SchemaRegistryConfig::default())
    }
}
