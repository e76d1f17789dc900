/// Notification dispatch errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport failed: {reason}")]
    Transport { reason: String },

    #[error("notification timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("notification endpoint returned status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("notifier is disabled")]
    Disabled,
}
