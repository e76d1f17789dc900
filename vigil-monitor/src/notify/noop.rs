//! Notifier that accepts every message and delivers nothing.

use vigil_core::errors::NotifyError;
use vigil_core::traits::INotifier;

/// Stands in when notifications are disabled or unavailable. Alerts are
/// still audited and traced; only outbound delivery is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl INotifier for NoopNotifier {
    fn notify(&self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}
