use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::config::EnvFile;

use super::types::{ComposeCommand, OutputMode};

/// Run a compose command to completion and return its exit status.
///
/// `launcher` is the program providing `compose` plus any leading arguments
/// (`["docker"]`, `["podman"]`, `["sudo", "docker"]`).
/// The env file's variables are added to the child's environment only;
/// this process's own environment is left alone. Stdin is closed.
pub fn run(
    launcher: &[String],
    cmd: &ComposeCommand,
    env: &EnvFile,
    dir: &Path,
) -> io::Result<ExitStatus> {
    let (program, prefix) = launcher
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty docker command"))?;

    let (stdout, stderr) = match cmd.output {
        OutputMode::Inherit => (Stdio::inherit(), Stdio::inherit()),
        OutputMode::Discard => (Stdio::null(), Stdio::null()),
    };

    tracing::debug!(program = %program, command = %cmd.display(), "running");
    Command::new(program)
        .args(prefix)
        .args(&cmd.args)
        .envs(env.iter())
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(stderr)
        .status()
}
