use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::{Color, Stylize};

use crate::config::RunConfig;
use crate::runner::{ImportOutcome, RunEvent, RunReport, RunState};

// ── Colour constants ──────────────────────────────────────────────────
pub const COLOR_PASS: Color = Color::Green;
pub const COLOR_FAIL: Color = Color::Red;
pub const COLOR_STEP: Color = Color::Cyan;
pub const COLOR_WAIT: Color = Color::Yellow;

// ── Icon constants ────────────────────────────────────────────────────
pub const ICON_PASS: &str = "✓";
pub const ICON_FAIL: &str = "✗";
pub const ICON_STEP: &str = "▶";
pub const ICON_WAIT: &str = "…";

/// Renders run events as coloured progress lines.
pub struct Printer<W: Write> {
    out: W,
    db_service: String,
    import_service: String,
}

impl Printer<io::Stdout> {
    pub fn stdout(cfg: &RunConfig) -> Self {
        Self::new(io::stdout(), cfg)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, cfg: &RunConfig) -> Self {
        Self {
            out,
            db_service: cfg.db_service.clone(),
            import_service: cfg.import_service.clone(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn event(&mut self, event: &RunEvent) {
        match event {
            RunEvent::StateChanged(state) => self.state(*state),
            RunEvent::ProbeAttempt { attempt, ready } => {
                if !ready {
                    self.line(
                        ICON_WAIT,
                        COLOR_WAIT,
                        &format!("{} not ready (attempt {attempt})", self.db_service),
                    );
                }
            }
            RunEvent::Ready(stats) => self.line(
                ICON_PASS,
                COLOR_PASS,
                &format!(
                    "{} ready after {} probe(s), waited {}",
                    self.db_service,
                    stats.probes,
                    format_duration(stats.waited)
                ),
            ),
            RunEvent::ImportFinished(outcome) => match outcome {
                ImportOutcome::Succeeded => self.line(ICON_PASS, COLOR_PASS, "import succeeded"),
                ImportOutcome::Failed { code: Some(code) } => {
                    self.line(ICON_FAIL, COLOR_FAIL, &format!("import failed (exit {code})"))
                }
                ImportOutcome::Failed { code: None } => {
                    self.line(ICON_FAIL, COLOR_FAIL, "import failed (killed by signal)")
                }
            },
        }
    }

    pub fn summary(&mut self, report: &RunReport) {
        let (icon, color) = if report.outcome.is_success() {
            (ICON_PASS, COLOR_PASS)
        } else {
            (ICON_FAIL, COLOR_FAIL)
        };
        self.line(
            icon,
            color,
            &format!("done, total time {}", format_duration(report.elapsed)),
        );
    }

    pub fn error(&mut self, message: &str) {
        self.line(ICON_FAIL, COLOR_FAIL, message);
    }

    fn state(&mut self, state: RunState) {
        let message = match state {
            RunState::Starting => "starting service group".to_string(),
            RunState::AwaitingReady => format!("waiting for {}", self.db_service),
            RunState::Importing => format!("running import in {}", self.import_service),
            RunState::Stopping => "stopping service group".to_string(),
            RunState::Init | RunState::Succeeded | RunState::Failed | RunState::Terminal => {
                return;
            }
        };
        self.line(ICON_STEP, COLOR_STEP, &message);
    }

    fn line(&mut self, icon: &str, color: Color, message: &str) {
        // A closed stdout must not abort the run.
        let _ = writeln!(self.out, "{} {}", icon.with(color).bold(), message.with(color));
        let _ = self.out.flush();
    }
}

/// `12.3s` below a minute, `2m05s` above.
pub fn format_duration(d: Duration) -> String {
    // Pick the unit after rounding so 59.96s does not print as "60.0s".
    let tenths = (d.as_secs_f64() * 10.0).round() as u64;
    if tenths < 600 {
        format!("{}.{}s", tenths / 10, tenths % 10)
    } else {
        let secs = d.as_secs_f64().round() as u64;
        format!("{}m{:02}s", secs / 60, secs % 60)
    }
}
