use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOCKER_COMMAND: &str = "docker";
pub const DEFAULT_DB_SERVICE: &str = "db";
pub const DEFAULT_IMPORT_SERVICE: &str = "app";
pub const DEFAULT_PROBE_COMMAND: &str = "mysqladmin ping -h localhost --silent";
pub const DEFAULT_IMPORT_COMMAND: &str = "python main.py";

/// Everything the runner needs to know about one run. Loaded once, then
/// passed by reference to each step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub env_file: PathBuf,
    /// Program (plus leading arguments) that provides `compose`.
    pub docker_command: String,
    pub compose_file: Option<PathBuf>,
    pub project_name: Option<String>,
    pub db_service: String,
    pub import_service: String,
    pub probe_command: String,
    pub import_command: String,
    pub scratch_dir: PathBuf,
    pub poll_interval_secs: u64,
    pub grace_delay_secs: u64,
    pub max_probe_attempts: Option<u32>,
    pub exec_as_invoking_user: bool,
    pub fail_on_import_error: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(".env"),
            docker_command: DEFAULT_DOCKER_COMMAND.to_string(),
            compose_file: None,
            project_name: None,
            db_service: DEFAULT_DB_SERVICE.to_string(),
            import_service: DEFAULT_IMPORT_SERVICE.to_string(),
            probe_command: DEFAULT_PROBE_COMMAND.to_string(),
            import_command: DEFAULT_IMPORT_COMMAND.to_string(),
            scratch_dir: PathBuf::from("data"),
            poll_interval_secs: 1,
            grace_delay_secs: 10,
            max_probe_attempts: None,
            exec_as_invoking_user: false,
            fail_on_import_error: false,
        }
    }
}

impl RunConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn grace_delay(&self) -> Duration {
        Duration::from_secs(self.grace_delay_secs)
    }

    /// Split `docker_command` into argv.
    pub fn docker_argv(&self) -> Result<Vec<String>> {
        split_command("docker_command", &self.docker_command)
    }

    /// Split `probe_command` into argv.
    pub fn probe_argv(&self) -> Result<Vec<String>> {
        split_command("probe_command", &self.probe_command)
    }

    /// Split `import_command` into argv.
    pub fn import_argv(&self) -> Result<Vec<String>> {
        split_command("import_command", &self.import_command)
    }

    /// Reject values that would make the run meaningless before anything is started.
    pub fn validate(&self) -> Result<()> {
        if self.db_service.trim().is_empty() {
            bail!("db_service must not be empty");
        }
        if self.import_service.trim().is_empty() {
            bail!("import_service must not be empty");
        }
        if self.poll_interval_secs == 0 {
            bail!("poll_interval_secs must be at least 1");
        }
        if self.max_probe_attempts == Some(0) {
            bail!("max_probe_attempts must be a positive integer when set");
        }
        self.docker_argv()?;
        self.probe_argv()?;
        self.import_argv()?;
        Ok(())
    }
}

fn split_command(field: &str, raw: &str) -> Result<Vec<String>> {
    let argv = shell_words::split(raw).with_context(|| format!("{field} is not a valid command line"))?;
    if argv.is_empty() {
        bail!("{field} must not be empty");
    }
    Ok(argv)
}
