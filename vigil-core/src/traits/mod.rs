pub mod audit;
pub mod clock;
pub mod notifier;

pub use audit::IAuditSink;
pub use clock::{IClock, ManualClock, SystemClock};
pub use notifier::INotifier;
