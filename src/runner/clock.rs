use std::time::{Duration, Instant};

/// Time source for the wait-loop. The only suspension point in a run goes
/// through here.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);

    /// Time since the clock was created.
    fn elapsed(&self) -> Duration;
}

/// Wall clock. `sleep` blocks the calling thread.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock that advances only when slept on. Records every sleep.
///
/// Meant for tests and dry runs: nothing actually waits.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        self.sleeps.push(duration);
    }

    fn elapsed(&self) -> Duration {
        self.now
    }
}
