//! # vigil-monitor
//!
//! The monitoring engine for vigil. Everything that happens after a
//! prediction is judged lives here: the sliding window that counts recent
//! wrong predictions, the bounded buffer of recent failures, the running
//! accuracy counters, the level-triggered alert engine, the append-only
//! audit log, and the notification channels alerts are delivered on.
//!
//! [`ModelMonitor`] is the entry point; the submodules are exported for
//! callers that wire their own sinks, notifiers, or clocks.

pub mod audit;
pub mod engine;
pub mod events;
pub mod message;
pub mod monitor;
pub mod notify;
pub mod recent;
pub mod stats;
pub mod window;

pub use engine::{AlertEngine, AlertOutcome};
pub use monitor::ModelMonitor;
pub use recent::RecentBuffer;
pub use stats::RunningStats;
pub use window::SlidingWindow;
