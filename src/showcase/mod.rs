//! Showcase state: registry, demo table and validated configs, built once at
//! startup and shared read-only by every request handler and the audit command.

pub mod audit;
pub mod demos;
pub mod pages;
pub mod resolver;

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::registry::{catalog, Registry, RegistryError};
use crate::validator::{build_registry, ComponentConfigs, ComponentRegistry};

use audit::DemoValidation;
use demos::DemoTable;
use resolver::{NotFound, Resolved};

/// Everything a showcase request needs to answer
#[derive(Debug)]
pub struct Showcase {
    pub registry: Registry,
    pub demos: DemoTable,
    pub components: ComponentRegistry,
    /// Configs whose component name does not match exactly one registry entry
    pub config_mismatches: Vec<ConfigMismatch>,
}

/// A demo config with no registry entry, or with several, for its component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMismatch {
    pub key: String,
    pub component_name: String,
    /// Registry entries carrying `component_name`
    pub matches: usize,
}

impl fmt::Display for ConfigMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.matches {
            0 => write!(
                f,
                "config '{}' ({}) matches no registry entry",
                self.key, self.component_name
            ),
            n => write!(
                f,
                "config '{}' ({}) matches {} registry entries",
                self.key, self.component_name, n
            ),
        }
    }
}

/// Every config must name exactly one registry entry
pub fn check_configs(registry: &Registry, configs: &ComponentConfigs) -> Vec<ConfigMismatch> {
    configs
        .iter()
        .filter_map(|(key, config)| {
            let matches = registry
                .all()
                .iter()
                .filter(|d| d.name == config.component_name)
                .count();
            (matches != 1).then(|| ConfigMismatch {
                key: key.clone(),
                component_name: config.component_name.clone(),
                matches,
            })
        })
        .collect()
}

impl Showcase {
    /// Assemble a showcase and validate its configs
    pub fn new(registry: Registry, demos: DemoTable, configs: ComponentConfigs) -> Self {
        let config_mismatches = check_configs(&registry, &configs);
        let components = build_registry(configs);
        Self {
            registry,
            demos,
            components,
            config_mismatches,
        }
    }

    /// Built-in catalog, demos and configs
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_registry_file(None)
    }

    /// Built-in demos and configs over a registry read from `registry_file`,
    /// or the built-in catalog when none is given
    pub fn from_registry_file(registry_file: Option<&Path>) -> Result<Self, RegistryError> {
        let registry = match registry_file {
            Some(path) => {
                tracing::info!("Loading registry from {}", path.display());
                Registry::from_file(path)?
            }
            None => catalog::builtin()?,
        };

        Ok(Self::new(
            registry,
            demos::builtin_demos(),
            demos::builtin_configs(),
        ))
    }

    /// Resolve a component page slug
    pub fn resolve(&self, slug: &str) -> Result<Resolved<'_>, NotFound> {
        resolver::resolve(&self.registry, &self.demos, slug)
    }

    /// Resolve a prototype page slug
    pub fn resolve_prototype(&self, slug: &str) -> Result<Resolved<'_>, NotFound> {
        resolver::resolve_prototype(&self.registry, &self.demos, slug)
    }

    /// Live demo coverage of the loaded registry
    pub fn coverage(&self) -> DemoValidation {
        audit::validate_demos(self.registry.all(), self.demos.slugs())
    }

    /// Log coverage gaps, unmatched configs and failed validations
    ///
    /// Called at startup in development mode; never fails.
    pub fn warn_on_gaps(&self) {
        let coverage = self.coverage();
        if !coverage.valid {
            tracing::warn!("{}", audit::report(&coverage));
        }

        for mismatch in &self.config_mismatches {
            tracing::warn!("Demo {}", mismatch);
        }

        for failed in &self.components.failed_components {
            tracing::warn!(
                "Component {} cannot render: {}",
                failed.component_name,
                failed.error.as_deref().unwrap_or("Unknown error")
            );
        }
    }
}
