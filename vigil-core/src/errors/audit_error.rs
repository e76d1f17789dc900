/// Audit sink errors. The engine logs and swallows these; adapters that
/// open sinks themselves propagate them.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit I/O failure on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("audit entry serialization failed: {reason}")]
    Serialize { reason: String },
}
