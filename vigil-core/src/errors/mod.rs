pub mod audit_error;
pub mod config_error;
pub mod notify_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use notify_error::NotifyError;

/// Top-level error for the vigil workspace.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("audit error: {0}")]
    Audit(#[from] AuditError),

    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
}

/// Convenience result alias used across the workspace.
pub type VigilResult<T> = Result<T, VigilError>;
