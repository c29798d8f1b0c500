use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dbstage::config::{self, EnvFile};
use dbstage::docker::{self, ComposeOrchestrator};
use dbstage::runner::{SystemClock, run_lifecycle};
use dbstage::status::Printer;

/// Exit code when the import failed and `fail_on_import_error` is set.
const EXIT_IMPORT_FAILED: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dbstage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if std::env::args_os().len() > 1 {
        tracing::warn!("dbstage takes no arguments; ignoring them");
    }

    match run() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "run aborted");
            Printer::stdout(&config::RunConfig::default()).error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let cfg = config::load(&cwd)?;
    let env = EnvFile::load(&cwd.join(&cfg.env_file))?;

    tracing::info!(
        db_service = %cfg.db_service,
        import_service = %cfg.import_service,
        env_vars = env.len(),
        max_probe_attempts = ?cfg.max_probe_attempts,
        "configuration loaded"
    );

    docker::ensure_available(&cfg.docker_argv()?)?;
    let mut orchestrator = ComposeOrchestrator::new(&cfg, env, &cwd)?;
    let mut clock = SystemClock::new();
    let mut printer = Printer::stdout(&cfg);

    let report = run_lifecycle(&mut orchestrator, &cfg, &mut clock, |event| {
        printer.event(&event)
    })?;
    printer.summary(&report);

    if cfg.fail_on_import_error && !report.outcome.is_success() {
        return Ok(ExitCode::from(EXIT_IMPORT_FAILED));
    }
    Ok(ExitCode::SUCCESS)
}
