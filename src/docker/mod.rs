// Docker compose orchestration: command assembly, synchronous execution.

pub mod commands;
mod compose;
pub mod engine;
pub mod run;
pub mod types;

pub use compose::{ComposeOrchestrator, prepare_scratch_dir};
pub use engine::{ensure_available, user_args};
pub use types::{ComposeCommand, OutputMode};
