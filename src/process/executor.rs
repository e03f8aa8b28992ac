use std::ffi::CString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use super::ProcessError;

/// Runs resolved executables as blocking child processes.
#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `path` with `argv` (argv[0] included) and a flattened
    /// `NAME=VALUE` environment, then waits for it to finish.
    pub fn execute(&self, path: &Path, argv: &[String], env: &[String]) -> Result<i32, ProcessError> {
        let mut command = Command::new(path);
        if let Some((arg0, rest)) = argv.split_first() {
            command.arg0(arg0).args(rest);
        }
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter().filter_map(|entry| entry.split_once('=')));

        let mut child = command.spawn().map_err(ProcessError::SpawnFailed)?;
        debug!("spawned {} as pid {}", path.display(), child.id());

        let status = child.wait().map_err(ProcessError::WaitFailed)?;
        let code = exit_code(status);
        debug!("pid {} finished with status {}", child.id(), code);
        Ok(code)
    }
}

/// Normal exit yields the exit code; death by signal N yields 128 + N.
pub fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => status.signal().map_or(-1, |signal| 128 + signal),
    }
}

/// A path is invocable when it is a regular file the current user may execute.
pub fn is_invocable(path: &Path) -> bool {
    let is_regular = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_regular {
        return false;
    }

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}
