//! Notification channels for triggered alerts.

pub mod noop;
pub mod webhook;

pub use noop::NoopNotifier;
pub use webhook::WebhookNotifier;

use std::sync::Arc;

use vigil_core::config::NotifierConfig;
use vigil_core::traits::INotifier;

use crate::events;

/// Build the notifier described by `config`.
///
/// Never fails: a disabled channel is expected and logs at debug, an
/// enabled channel that cannot deliver degrades to [`NoopNotifier`] with
/// a warning. A broken alerting setup must not block recording.
pub fn build_notifier(config: &NotifierConfig) -> Arc<dyn INotifier> {
    if !config.enabled {
        events::notifier_disabled();
        return Arc::new(NoopNotifier);
    }
    if config.webhook_url.trim().is_empty() {
        events::notifier_degraded("notifier enabled but webhook_url is empty");
        return Arc::new(NoopNotifier);
    }
    match WebhookNotifier::new(&config.webhook_url, config.timeout_secs) {
        Ok(notifier) => {
            events::notifier_ready(notifier.url());
            Arc::new(notifier)
        }
        Err(e) => {
            events::notifier_degraded(&e.to_string());
            Arc::new(NoopNotifier)
        }
    }
}
