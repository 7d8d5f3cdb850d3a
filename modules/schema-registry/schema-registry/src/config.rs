//! Configuration for the Schema Registry module.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "SCHEMA_REGISTRY_";

/// How the registry treats a base chain that loops back on itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Refuse the registration that would close the loop.
    #[default]
    Reject,
    /// Accept it; resolution stops at the first repeated type.
    Truncate,
}

/// Configuration for the Schema Registry module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SchemaRegistryConfig {
    /// Handling of cyclic base chains.
    /// Default: `reject`
    pub cycle_policy: CyclePolicy,

    /// Whether registering an existing name replaces the previous descriptor.
    /// Default: `true`
    pub allow_redefinition: bool,
}

impl Default for SchemaRegistryConfig {
    fn default() -> Self {
        Self {
            cycle_policy: CyclePolicy::Reject,
            allow_redefinition: true,
        }
    }
}

/// Configuration loading error.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("schema registry config file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("invalid schema registry config: {0}")]
    Invalid(#[source] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Invalid(Box::new(e))
    }
}

impl SchemaRegistryConfig {
    /// Extracts the configuration from an already layered figment.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if a value has the wrong shape or an unknown key is present.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Loads configuration from defaults, an optional YAML file, then
    /// `SCHEMA_REGISTRY_*` environment variables (highest precedence).
    ///
    /// # Errors
    /// Returns `ConfigError::Missing` if `path` is given but does not exist, or
    /// `ConfigError::Invalid` if the file or an override cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment
            .merge(Env::prefixed(ENV_PREFIX).only(&["cycle_policy", "allow_redefinition"]));

        Self::from_figment(&figment)
    }
}
