use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{EnvFile, RunConfig};
use crate::runner::{ImportOutcome, Orchestrator, RunError};

use super::commands::{down_command, import_command, probe_command, up_command};
use super::run::run;
use super::types::ComposeCommand;

/// [`Orchestrator`] backed by `docker compose` in a project directory.
#[derive(Debug)]
pub struct ComposeOrchestrator {
    launcher: Vec<String>,
    up: ComposeCommand,
    probe: ComposeCommand,
    import: ComposeCommand,
    down: ComposeCommand,
    env: EnvFile,
    project_dir: PathBuf,
    scratch_dir: PathBuf,
}

impl ComposeOrchestrator {
    /// Assemble every command up front so a bad config fails before `up`.
    pub fn new(cfg: &RunConfig, env: EnvFile, project_dir: &Path) -> Result<Self> {
        let probe = probe_command(cfg, &cfg.probe_argv()?);
        let import = import_command(cfg, &cfg.import_argv()?);
        Ok(Self {
            launcher: cfg.docker_argv()?,
            up: up_command(cfg),
            probe,
            import,
            down: down_command(cfg),
            env,
            project_dir: project_dir.to_path_buf(),
            scratch_dir: project_dir.join(&cfg.scratch_dir),
        })
    }

    fn execute(&self, cmd: &ComposeCommand, action: &'static str) -> Result<Option<i32>, RunError> {
        let status =
            run(&self.launcher, cmd, &self.env, &self.project_dir).map_err(|source| RunError::Io { action, source })?;
        Ok(status.code())
    }

    fn run_checked(&self, cmd: &ComposeCommand, action: &'static str) -> Result<(), RunError> {
        match self.execute(cmd, action)? {
            Some(0) => Ok(()),
            code => Err(RunError::Orchestrator { action, code }),
        }
    }
}

/// Create the scratch directory the compose volumes mount. Idempotent.
pub fn prepare_scratch_dir(path: &Path) -> Result<(), RunError> {
    std::fs::create_dir_all(path).map_err(|source| RunError::Io {
        action: "create scratch directory",
        source,
    })
}

impl Orchestrator for ComposeOrchestrator {
    fn start(&mut self) -> Result<(), RunError> {
        prepare_scratch_dir(&self.scratch_dir)?;
        tracing::info!(command = %self.up.display(), "starting service group");
        self.run_checked(&self.up, "compose up")
    }

    fn probe_ready(&mut self) -> Result<bool, RunError> {
        Ok(self.execute(&self.probe, "run readiness probe")? == Some(0))
    }

    fn run_import(&mut self) -> Result<ImportOutcome, RunError> {
        tracing::info!(command = %self.import.display(), "running import");
        let code = self.execute(&self.import, "run import")?;
        Ok(ImportOutcome::from_code(code))
    }

    fn stop(&mut self) -> Result<(), RunError> {
        tracing::info!(command = %self.down.display(), "stopping service group");
        self.run_checked(&self.down, "compose down")
    }
}
