use super::aliases::AliasManager;
use super::env::Environment;

/// Everything one interpreter instance carries from line to line.
///
/// The current line and its tokens are not stored here: they live in the
/// loop iteration that reads them and are dropped before the next read.
#[derive(Debug)]
pub struct ShellState {
    /// 1-based number of the line being handled, for diagnostics.
    pub lineno: usize,
    pub env: Environment,
    pub aliases: AliasManager,
    pub pid: u32,
    /// Name printed at the start of every diagnostic.
    pub prog: String,
    /// Status of the last command, `$?`.
    pub status: i32,
    pub running: bool,
}

impl ShellState {
    pub fn new(prog: impl Into<String>, env: Environment) -> Self {
        Self {
            lineno: 1,
            env,
            aliases: AliasManager::new(),
            pid: std::process::id(),
            prog: prog.into(),
            status: 0,
            running: true,
        }
    }

    /// Ends the interpreter loop once the current line is done.
    pub fn request_exit(&mut self, status: i32) {
        self.status = status;
        self.running = false;
    }
}
