use serde::{Deserialize, Serialize};

use super::defaults;

/// Outbound notification configuration.
///
/// An enabled notifier missing its URL is not a validation error: the
/// monitor degrades to a no-op channel with a diagnostic, so a broken
/// alerting setup can never block startup or recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub enabled: bool,
    /// Webhook endpoint. Required for delivery when `enabled` is true.
    pub webhook_url: String,
    /// Per-request timeout (seconds).
    pub timeout_secs: u64,
}

impl NotifierConfig {
    /// True when the configuration describes a deliverable channel.
    pub fn is_deliverable(&self) -> bool {
        self.enabled && !self.webhook_url.trim().is_empty()
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            webhook_url: String::new(),
            timeout_secs: defaults::DEFAULT_NOTIFIER_TIMEOUT_SECS,
        }
    }
}
