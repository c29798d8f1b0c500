/// What to do with a command's stdout/stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Pass through to the terminal.
    Inherit,
    /// Throw away.
    Discard,
}

/// Describes a compose invocation. The `args` field is the full argument list
/// passed after the launcher (the command builders are responsible for assembling it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    pub args: Vec<String>,
    pub output: OutputMode,
}

impl ComposeCommand {
    /// Shell-quoted rendering for logs.
    pub fn display(&self) -> String {
        shell_words::join(&self.args)
    }
}
