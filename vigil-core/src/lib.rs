//! # vigil-core
//!
//! Foundation crate for the vigil model-quality monitoring system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use errors::{VigilError, VigilResult};
pub use models::{AlertRecord, AlertSample, Label, StatsSnapshot, WrongPrediction};
pub use traits::{IAuditSink, IClock, INotifier};
