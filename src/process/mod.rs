use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    SpawnFailed(std::io::Error),
    WaitFailed(std::io::Error),
}

impl ProcessError {
    /// Status recorded when running a child fails this way.
    pub fn status(&self) -> i32 {
        match self {
            ProcessError::SpawnFailed(_) => 1,
            ProcessError::WaitFailed(_) => -1,
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::SpawnFailed(e) => write!(f, "{}", e),
            ProcessError::WaitFailed(e) => write!(f, "waitpid failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
