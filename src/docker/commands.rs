use crate::config::RunConfig;

use super::engine;
use super::types::{ComposeCommand, OutputMode};

/// `docker compose [-f FILE] [-p NAME]`, shared by every command.
fn base_args(cfg: &RunConfig) -> Vec<String> {
    let mut args = vec!["compose".to_string()];
    if let Some(file) = &cfg.compose_file {
        args.push("-f".into());
        args.push(file.display().to_string());
    }
    if let Some(project) = &cfg.project_name {
        args.push("-p".into());
        args.push(project.clone());
    }
    args
}

/// Build `docker compose up -d`.
pub fn up_command(cfg: &RunConfig) -> ComposeCommand {
    let mut args = base_args(cfg);
    args.extend(["up".into(), "-d".into()]);
    ComposeCommand {
        args,
        output: OutputMode::Inherit,
    }
}

/// Build `docker compose exec -T <db_service> <probe...>`.
pub fn probe_command(cfg: &RunConfig, probe: &[String]) -> ComposeCommand {
    let mut args = base_args(cfg);
    args.extend(["exec".into(), "-T".into(), cfg.db_service.clone()]);
    args.extend(probe.iter().cloned());
    ComposeCommand {
        args,
        output: OutputMode::Discard,
    }
}

/// Build `docker compose exec -T [--user uid:gid] <import_service> <import...>`.
pub fn import_command(cfg: &RunConfig, import: &[String]) -> ComposeCommand {
    let mut args = base_args(cfg);
    args.extend(["exec".into(), "-T".into()]);
    if cfg.exec_as_invoking_user {
        args.extend(engine::user_args());
    }
    args.push(cfg.import_service.clone());
    args.extend(import.iter().cloned());
    ComposeCommand {
        args,
        output: OutputMode::Inherit,
    }
}

/// Build `docker compose down`.
pub fn down_command(cfg: &RunConfig) -> ComposeCommand {
    let mut args = base_args(cfg);
    args.push("down".into());
    ComposeCommand {
        args,
        output: OutputMode::Inherit,
    }
}
