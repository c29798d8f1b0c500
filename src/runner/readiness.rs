use std::time::Duration;

use crate::config::RunConfig;

use super::clock::Clock;
use super::error::RunError;
use super::orchestrator::Orchestrator;
use super::types::{ReadyStats, RunEvent};

/// Poll the readiness probe until it succeeds, then sleep the grace delay once.
///
/// The probe is retried every `poll_interval` after a "not ready" answer.
/// With `max_probe_attempts` unset the wait is unbounded; otherwise the
/// last failed attempt returns [`RunError::ReadinessTimeout`] without sleeping.
pub fn await_ready<O, C, F>(
    orchestrator: &mut O,
    cfg: &RunConfig,
    clock: &mut C,
    on_event: &mut F,
) -> Result<ReadyStats, RunError>
where
    O: Orchestrator + ?Sized,
    C: Clock + ?Sized,
    F: FnMut(RunEvent),
{
    let poll_interval = cfg.poll_interval();
    let mut waited = Duration::ZERO;
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let ready = orchestrator.probe_ready()?;
        tracing::debug!(attempt, ready, "readiness probe");
        on_event(RunEvent::ProbeAttempt { attempt, ready });

        if ready {
            break;
        }

        if cfg.max_probe_attempts.is_some_and(|max| attempt >= max) {
            tracing::error!(attempts = attempt, "readiness probe never succeeded");
            return Err(RunError::ReadinessTimeout { attempts: attempt });
        }

        clock.sleep(poll_interval);
        waited += poll_interval;
    }

    // The probe can pass before the engine finishes its own setup.
    let grace = cfg.grace_delay();
    if !grace.is_zero() {
        tracing::debug!(grace_secs = grace.as_secs(), "applying grace delay");
        clock.sleep(grace);
        waited += grace;
    }

    let stats = ReadyStats {
        probes: attempt,
        waited,
    };
    on_event(RunEvent::Ready(stats));
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::clock::ManualClock;
    use crate::runner::fake::{Call, FakeOrchestrator};

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn run(orch: &mut FakeOrchestrator, cfg: &RunConfig) -> (Result<ReadyStats, RunError>, ManualClock) {
        let mut clock = ManualClock::new();
        let result = await_ready(orch, cfg, &mut clock, &mut |_| {});
        (result, clock)
    }

    #[test]
    fn immediate_success_still_applies_grace() {
        let mut orch = FakeOrchestrator::ready_after(0);
        let (result, clock) = run(&mut orch, &RunConfig::default());
        let stats = result.unwrap();
        assert_eq!(stats.probes, 1);
        assert_eq!(stats.waited, secs(10));
        assert_eq!(clock.sleeps(), &[secs(10)]);
    }

    #[test]
    fn five_failures_then_success() {
        let mut orch = FakeOrchestrator::ready_after(5);
        let (result, clock) = run(&mut orch, &RunConfig::default());
        let stats = result.unwrap();
        assert_eq!(stats.probes, 6);
        assert_eq!(stats.waited, secs(15));
        assert_eq!(clock.elapsed(), secs(15));
        assert_eq!(clock.sleeps()[..5], [secs(1); 5]);
        assert_eq!(clock.sleeps()[5], secs(10));
    }

    #[test]
    fn probe_count_matches_invocations() {
        let mut orch = FakeOrchestrator::ready_after(3);
        let (result, _) = run(&mut orch, &RunConfig::default());
        let probes = orch
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::Probe))
            .count();
        assert_eq!(probes as u32, result.unwrap().probes);
        assert_eq!(probes, 4);
    }

    #[test]
    fn bounded_attempts_time_out() {
        let mut orch = FakeOrchestrator::never_ready();
        let cfg = RunConfig {
            max_probe_attempts: Some(3),
            ..RunConfig::default()
        };
        let (result, clock) = run(&mut orch, &cfg);
        match result {
            Err(RunError::ReadinessTimeout { attempts }) => assert_eq!(attempts, 3),
            other => panic!("expected ReadinessTimeout, got {other:?}"),
        }
        // No sleep after the final failed attempt, no grace.
        assert_eq!(clock.sleeps(), &[secs(1), secs(1)]);
    }

    #[test]
    fn bound_is_not_hit_when_probe_succeeds_on_last_attempt() {
        let mut orch = FakeOrchestrator::ready_after(2);
        let cfg = RunConfig {
            max_probe_attempts: Some(3),
            ..RunConfig::default()
        };
        let (result, _) = run(&mut orch, &cfg);
        assert_eq!(result.unwrap().probes, 3);
    }

    #[test]
    fn zero_grace_skips_the_sleep() {
        let mut orch = FakeOrchestrator::ready_after(1);
        let cfg = RunConfig {
            grace_delay_secs: 0,
            ..RunConfig::default()
        };
        let (result, clock) = run(&mut orch, &cfg);
        assert_eq!(result.unwrap().waited, secs(1));
        assert_eq!(clock.sleeps(), &[secs(1)]);
    }

    #[test]
    fn emits_one_event_per_probe() {
        let mut orch = FakeOrchestrator::ready_after(2);
        let mut clock = ManualClock::new();
        let mut events = Vec::new();
        await_ready(&mut orch, &RunConfig::default(), &mut clock, &mut |e| {
            events.push(e)
        })
        .unwrap();
        assert_eq!(
            events,
            vec![
                RunEvent::ProbeAttempt { attempt: 1, ready: false },
                RunEvent::ProbeAttempt { attempt: 2, ready: false },
                RunEvent::ProbeAttempt { attempt: 3, ready: true },
                RunEvent::Ready(ReadyStats {
                    probes: 3,
                    waited: secs(12)
                }),
            ]
        );
    }
}
