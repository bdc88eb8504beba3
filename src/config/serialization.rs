//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let registry_line = match &self.registry_file {
            Some(path) => format!("registry_file = \"{}\"", path.display()),
            None => "# registry_file = \"registry.toml\"".to_string(),
        };

        format!(
            r#"# ds-showcase configuration

# Server bind address (SHOWCASE_BIND overrides)
bind_addr = "{bind}"

# Run mode: development, production (SHOWCASE_ENV overrides)
# Development mode reports missing demos and failed components at startup
mode = "{mode}"

# Registry declaration in TOML; unset uses the built-in catalog (SHOWCASE_REGISTRY overrides)
# Sections: [[ui_primitives]], [[custom_components]], [[draft_components]], [[prototypes]], [[pages]]
{registry_line}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"

# Startup audit
[audit]
warn_on_startup = {warn_on_startup}
"#,
            bind = self.bind_addr,
            mode = self.mode.as_str(),
            registry_line = registry_line,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
            warn_on_startup = self.audit.warn_on_startup,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
