use super::error::RunError;
use super::types::ImportOutcome;

/// The external collaborator that owns the service group.
pub trait Orchestrator {
    /// Bring the service group up.
    fn start(&mut self) -> Result<(), RunError>;

    /// Run the readiness probe once. `Ok(false)` means "not ready yet".
    fn probe_ready(&mut self) -> Result<bool, RunError>;

    /// Run the import program to completion.
    fn run_import(&mut self) -> Result<ImportOutcome, RunError>;

    /// Bring the service group down.
    fn stop(&mut self) -> Result<(), RunError>;
}

/// A started service group. Stops the group on drop unless
/// [`ServiceGroup::stop`] already did.
pub struct ServiceGroup<'a, O: Orchestrator + ?Sized> {
    orchestrator: &'a mut O,
    stopped: bool,
}

impl<'a, O: Orchestrator + ?Sized> ServiceGroup<'a, O> {
    /// Wrap an orchestrator whose `start` has already succeeded.
    pub fn new(orchestrator: &'a mut O) -> Self {
        Self {
            orchestrator,
            stopped: false,
        }
    }

    pub fn orchestrator(&mut self) -> &mut O {
        &mut *self.orchestrator
    }

    pub fn stop(mut self) -> Result<(), RunError> {
        self.stopped = true;
        self.orchestrator.stop()
    }
}

impl<O: Orchestrator + ?Sized> Drop for ServiceGroup<'_, O> {
    fn drop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        tracing::warn!("run aborted before stop, stopping service group");
        if let Err(e) = self.orchestrator.stop() {
            tracing::error!(error = %e, "failed to stop service group");
        }
    }
}
