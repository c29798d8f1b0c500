use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Verify that `<launcher> compose` is installed and usable.
pub fn ensure_available(launcher: &[String]) -> Result<()> {
    let Some((program, prefix)) = launcher.split_first() else {
        bail!("docker command is empty");
    };

    let status = Command::new(program)
        .args(prefix)
        .args(["compose", "version", "--short"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("failed to invoke `{program}`: is it installed and on PATH?"))?;

    if !status.success() {
        bail!("`{program} compose` is not available (exit {})", status);
    }
    Ok(())
}

/// Returns `["--user", "uid:gid"]` on Unix so the import writes files
/// as the invoking user. Empty on other platforms.
pub fn user_args() -> Vec<String> {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() and getegid() are simple POSIX getters that always succeed and have no side effects.
        let uid = unsafe { libc::geteuid() };
        let gid = unsafe { libc::getegid() };
        vec!["--user".into(), format!("{uid}:{gid}")]
    }

    #[cfg(not(unix))]
    {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn missing_program_names_it_in_the_error() {
        let err = ensure_available(&argv(&["/nonexistent/dbstage-docker"])).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed to invoke `/nonexistent/dbstage-docker`"));
    }

    #[test]
    fn empty_launcher_is_an_error() {
        assert!(ensure_available(&[]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_means_available() {
        // `sh -c 'exit 0' compose version --short`: the compose words become $0..$2.
        assert!(ensure_available(&argv(&["sh", "-c", "exit 0"])).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_means_unavailable() {
        let err = ensure_available(&argv(&["sh", "-c", "exit 1"])).unwrap_err();
        assert!(err.to_string().contains("`sh compose` is not available"));
    }

    #[cfg(unix)]
    #[test]
    fn user_args_returns_pair() {
        let args = user_args();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0], "--user");
        assert!(args[1].contains(':'));
    }
}
