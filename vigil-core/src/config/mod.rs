pub mod audit_config;
pub mod defaults;
pub mod monitor_config;
pub mod notifier_config;

pub use audit_config::AuditConfig;
pub use monitor_config::MonitorConfig;
pub use notifier_config::NotifierConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_WINDOW_SECS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections. Every field has a
/// compiled default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub monitor: MonitorConfig,
    pub audit: AuditConfig,
    pub notifier: NotifierConfig,
}

impl VigilConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse, and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Check structural sanity. Notifier completeness is deliberately not
    /// checked here; an enabled-but-incomplete notifier degrades to a
    /// no-op at construction time instead of failing startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor.alert_threshold == 0 {
            return Err(ConfigError::Invalid {
                field: "monitor.alert_threshold".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.monitor.window_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "monitor.window_secs".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.monitor.window_secs > MAX_WINDOW_SECS {
            return Err(ConfigError::Invalid {
                field: "monitor.window_secs".to_string(),
                reason: format!("must be at most {MAX_WINDOW_SECS}"),
            });
        }
        if self.monitor.recent_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "monitor.recent_capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.monitor.sample_truncate_chars == 0 {
            return Err(ConfigError::Invalid {
                field: "monitor.sample_truncate_chars".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.monitor.audit_truncate_chars == 0 {
            return Err(ConfigError::Invalid {
                field: "monitor.audit_truncate_chars".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.audit.path.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "audit.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.notifier.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "notifier.timeout_secs".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
