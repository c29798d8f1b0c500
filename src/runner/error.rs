use std::io;

use thiserror::Error;

/// Failures that abort a run. A non-zero import exit is not one of them;
/// it is reported as [`ImportOutcome::Failed`](super::ImportOutcome::Failed).
#[derive(Debug, Error)]
pub enum RunError {
    #[error("`{action}` exited with {}", describe_code(.code))]
    Orchestrator { action: &'static str, code: Option<i32> },

    #[error("failed to {action}")]
    Io {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("service not ready after {attempts} probe(s)")]
    ReadinessTimeout { attempts: u32 },
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
