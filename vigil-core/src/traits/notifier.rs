use crate::errors::NotifyError;

/// Outbound alert channel. Failures are independent of the monitor core:
/// the engine logs them and keeps recording.
pub trait INotifier: Send + Sync {
    /// Deliver one opaque alert message.
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}
