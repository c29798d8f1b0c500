// Lifecycle runner: start the service group, wait for it, import, stop.

mod clock;
mod error;
#[cfg(test)]
mod fake;
mod lifecycle;
mod orchestrator;
mod readiness;
mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::RunError;
pub use lifecycle::run_lifecycle;
pub use orchestrator::{Orchestrator, ServiceGroup};
pub use readiness::await_ready;
pub use types::{ImportOutcome, ReadyStats, RunEvent, RunReport, RunState};
