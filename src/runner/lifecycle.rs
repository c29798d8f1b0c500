use crate::config::RunConfig;

use super::clock::Clock;
use super::error::RunError;
use super::orchestrator::{Orchestrator, ServiceGroup};
use super::readiness::await_ready;
use super::types::{ImportOutcome, ReadyStats, RunEvent, RunReport, RunState};

/// Run start → await readiness → import → stop, in that order.
///
/// Stop is attempted exactly once whenever start succeeded, whatever the
/// import did. A failed import is not an error: it comes back in
/// [`RunReport::outcome`]. Errors are start/stop failures, a readiness
/// timeout, or an import that could not be launched at all.
pub fn run_lifecycle<O, C, F>(
    orchestrator: &mut O,
    cfg: &RunConfig,
    clock: &mut C,
    mut on_event: F,
) -> Result<RunReport, RunError>
where
    O: Orchestrator + ?Sized,
    C: Clock + ?Sized,
    F: FnMut(RunEvent),
{
    let started_at = clock.elapsed();
    let mut state = RunState::Init;

    transition(&mut state, RunState::Starting, &mut on_event);
    orchestrator.start()?;
    let mut group = ServiceGroup::new(orchestrator);

    let result = run_started(group.orchestrator(), cfg, clock, &mut state, &mut on_event);

    transition(&mut state, RunState::Stopping, &mut on_event);
    let stopped = group.stop();

    let (ready, outcome) = match result {
        Ok(done) => done,
        Err(e) => {
            if let Err(stop_err) = stopped {
                tracing::error!(error = %stop_err, "stop failed after aborted run");
            }
            return Err(e);
        }
    };
    stopped?;
    transition(&mut state, RunState::Terminal, &mut on_event);

    Ok(RunReport {
        outcome,
        ready,
        elapsed: clock.elapsed().saturating_sub(started_at),
    })
}

fn run_started<O, C, F>(
    orchestrator: &mut O,
    cfg: &RunConfig,
    clock: &mut C,
    state: &mut RunState,
    on_event: &mut F,
) -> Result<(ReadyStats, ImportOutcome), RunError>
where
    O: Orchestrator + ?Sized,
    C: Clock + ?Sized,
    F: FnMut(RunEvent),
{
    transition(state, RunState::AwaitingReady, on_event);
    let ready = await_ready(orchestrator, cfg, clock, on_event)?;

    transition(state, RunState::Importing, on_event);
    let outcome = orchestrator.run_import()?;
    match outcome {
        ImportOutcome::Succeeded => tracing::info!("import succeeded"),
        ImportOutcome::Failed { code } => tracing::warn!(?code, "import failed"),
    }
    on_event(RunEvent::ImportFinished(outcome));
    transition(state, outcome.state(), on_event);

    Ok((ready, outcome))
}

fn transition<F: FnMut(RunEvent)>(state: &mut RunState, next: RunState, on_event: &mut F) {
    tracing::debug!(from = %state, to = %next, "state change");
    *state = next;
    on_event(RunEvent::StateChanged(next));
}
