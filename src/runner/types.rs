use std::fmt;
use std::time::Duration;

/// Where a run currently is. Transitions are strictly linear apart from the
/// `Succeeded`/`Failed` branch, which does not change what happens next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    Starting,
    AwaitingReady,
    Importing,
    Succeeded,
    Failed,
    Stopping,
    Terminal,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Init => "init",
            RunState::Starting => "starting",
            RunState::AwaitingReady => "awaiting-ready",
            RunState::Importing => "importing",
            RunState::Succeeded => "succeeded",
            RunState::Failed => "failed",
            RunState::Stopping => "stopping",
            RunState::Terminal => "terminal",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the import program, classified from its exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Succeeded,
    /// `code` is `None` when the program was killed by a signal.
    Failed { code: Option<i32> },
}

impl ImportOutcome {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => ImportOutcome::Succeeded,
            other => ImportOutcome::Failed { code: other },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Succeeded)
    }

    pub fn state(&self) -> RunState {
        if self.is_success() {
            RunState::Succeeded
        } else {
            RunState::Failed
        }
    }
}

/// How the readiness wait went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyStats {
    pub probes: u32,
    /// Sleep time spent between probes plus the grace delay.
    pub waited: Duration,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: ImportOutcome,
    pub ready: ReadyStats,
    pub elapsed: Duration,
}

/// Progress notifications emitted by [`run_lifecycle`](super::run_lifecycle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    StateChanged(RunState),
    ProbeAttempt { attempt: u32, ready: bool },
    Ready(ReadyStats),
    ImportFinished(ImportOutcome),
}
