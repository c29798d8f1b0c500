//! Scripted orchestrator for unit tests.

use std::io;

use super::error::RunError;
use super::orchestrator::Orchestrator;
use super::types::ImportOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Start,
    Probe,
    Import,
    Stop,
}

pub struct FakeOrchestrator {
    failures_before_ready: Option<u32>,
    import_code: Option<i32>,
    fail_start: bool,
    fail_import_spawn: bool,
    fail_stop: bool,
    calls: Vec<Call>,
}

impl FakeOrchestrator {
    pub fn ready_after(failures: u32) -> Self {
        Self {
            failures_before_ready: Some(failures),
            import_code: Some(0),
            fail_start: false,
            fail_import_spawn: false,
            fail_stop: false,
            calls: Vec::new(),
        }
    }

    pub fn never_ready() -> Self {
        Self {
            failures_before_ready: None,
            ..Self::ready_after(0)
        }
    }

    pub fn with_import_code(mut self, code: Option<i32>) -> Self {
        self.import_code = code;
        self
    }

    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    pub fn failing_import_spawn(mut self) -> Self {
        self.fail_import_spawn = true;
        self
    }

    pub fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    fn probes_so_far(&self) -> u32 {
        self.calls.iter().filter(|c| **c == Call::Probe).count() as u32
    }
}

impl Orchestrator for FakeOrchestrator {
    fn start(&mut self) -> Result<(), RunError> {
        self.calls.push(Call::Start);
        if self.fail_start {
            return Err(RunError::Orchestrator {
                action: "compose up",
                code: Some(1),
            });
        }
        Ok(())
    }

    fn probe_ready(&mut self) -> Result<bool, RunError> {
        let previous = self.probes_so_far();
        self.calls.push(Call::Probe);
        Ok(self
            .failures_before_ready
            .is_some_and(|failures| previous >= failures))
    }

    fn run_import(&mut self) -> Result<ImportOutcome, RunError> {
        self.calls.push(Call::Import);
        if self.fail_import_spawn {
            return Err(RunError::Io {
                action: "spawn import",
                source: io::Error::new(io::ErrorKind::NotFound, "docker"),
            });
        }
        Ok(ImportOutcome::from_code(self.import_code))
    }

    fn stop(&mut self) -> Result<(), RunError> {
        self.calls.push(Call::Stop);
        if self.fail_stop {
            return Err(RunError::Orchestrator {
                action: "compose down",
                code: Some(1),
            });
        }
        Ok(())
    }
}
