use serde::{Deserialize, Serialize};

use super::defaults;

/// Audit log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Append target. Parent directories are created on open.
    pub path: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_AUDIT_PATH.to_string(),
        }
    }
}
