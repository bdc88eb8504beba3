//! Audit configuration
//!
//! Controls the coverage and validation check run when the server starts.

use serde::Deserialize;

/// Startup audit settings
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Log missing demos and failed components at startup (development mode only)
    pub warn_on_startup: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            warn_on_startup: true,
        }
    }
}

/// Audit settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileAudit {
    pub warn_on_startup: Option<bool>,
}

impl AuditConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileAudit>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            warn_on_startup: file
                .warn_on_startup
                .unwrap_or(Self::default().warn_on_startup),
        }
    }
}
