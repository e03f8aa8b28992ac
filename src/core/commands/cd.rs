use std::env;
use std::io::Write;
use std::path::PathBuf;

use super::{Command, CommandError};
use crate::core::state::ShellState;
use crate::path::PathExpander;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CdCommand;

impl CdCommand {
    /// Picks the directory to change to; `None` means there is nothing to do.
    fn target(state: &ShellState, arg: Option<&str>) -> Result<Option<PathBuf>, CommandError> {
        let expander = PathExpander::new(state.env.get("HOME"));

        match arg {
            None => Ok(state
                .env
                .get("HOME")
                .filter(|home| !home.is_empty())
                .map(PathBuf::from)),
            Some("-") => state
                .env
                .get("OLDPWD")
                .map(|old| Some(PathBuf::from(old)))
                .ok_or_else(|| CommandError::ExecutionError("OLDPWD not set".into())),
            Some(dir) => expander
                .expand(dir)
                .map(Some)
                .map_err(|_| CommandError::ChangeDir(dir.to_string())),
        }
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        let arg = args.first().map(String::as_str);
        let Some(target) = Self::target(state, arg)? else {
            return Ok(0);
        };

        let previous = match state.env.get("PWD") {
            Some(pwd) => Some(pwd.to_string()),
            None => env::current_dir()
                .ok()
                .map(|dir| dir.to_string_lossy().into_owned()),
        };

        let display = arg.unwrap_or("~");
        env::set_current_dir(&target).map_err(|_| CommandError::ChangeDir(display.to_string()))?;
        let current = env::current_dir()?.to_string_lossy().into_owned();

        if arg == Some("-") {
            writeln!(out, "{}", current)?;
        }

        let update = |state: &mut ShellState, name: &str, value: &str| {
            state
                .env
                .set(name, value)
                .map_err(|e| CommandError::ExecutionError(e.to_string()))
        };
        if let Some(previous) = previous {
            update(state, "OLDPWD", &previous)?;
        }
        update(state, "PWD", &current)?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;
    use serial_test::serial;
    use std::fs;

    /// Puts the working directory back when a test ends.
    struct RestoreDir(PathBuf);

    impl RestoreDir {
        fn new() -> Self {
            Self(env::current_dir().unwrap())
        }
    }

    impl Drop for RestoreDir {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.0);
        }
    }

    fn state_with_home(home: &std::path::Path) -> ShellState {
        let entry = format!("HOME={}", home.display());
        ShellState::new("hsh", Environment::from_strarr([entry]))
    }

    fn cd(state: &mut ShellState, args: &[&str], out: &mut Vec<u8>) -> Result<i32, CommandError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        CdCommand.execute(state, &args, out)
    }

    #[test]
    #[serial]
    fn test_cd_home_and_back() -> Result<(), Box<dyn std::error::Error>> {
        let _restore = RestoreDir::new();
        let home = tempfile::tempdir()?;
        let work = tempfile::tempdir()?;
        let home_path = fs::canonicalize(home.path())?;
        let work_path = fs::canonicalize(work.path())?;
        let mut state = state_with_home(&home_path);
        let mut out = Vec::new();

        cd(&mut state, &[work_path.to_str().unwrap()], &mut out)?;
        assert_eq!(env::current_dir()?, work_path);
        assert_eq!(state.env.get("PWD"), work_path.to_str());

        cd(&mut state, &[], &mut out)?;
        assert_eq!(env::current_dir()?, home_path);
        assert_eq!(state.env.get("OLDPWD"), work_path.to_str());
        assert!(out.is_empty());

        cd(&mut state, &["-"], &mut out)?;
        assert_eq!(env::current_dir()?, work_path);
        assert_eq!(String::from_utf8(out)?, format!("{}\n", work_path.display()));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_cd_tilde_path() -> Result<(), Box<dyn std::error::Error>> {
        let _restore = RestoreDir::new();
        let home = tempfile::tempdir()?;
        let home_path = fs::canonicalize(home.path())?;
        fs::create_dir(home_path.join("projects"))?;
        let mut state = state_with_home(&home_path);

        cd(&mut state, &["~/projects"], &mut Vec::new())?;
        assert_eq!(env::current_dir()?, home_path.join("projects"));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_cd_invalid() {
        let _restore = RestoreDir::new();
        let mut state = ShellState::new("hsh", Environment::new());
        let before = env::current_dir().unwrap();

        let err = cd(&mut state, &["/nonexistent/path"], &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "can't cd to /nonexistent/path");
        assert_eq!(err.status(), 2);
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_cd_without_home_is_a_no_op() {
        let _restore = RestoreDir::new();
        let mut state = ShellState::new("hsh", Environment::new());
        let before = env::current_dir().unwrap();

        assert_eq!(cd(&mut state, &[], &mut Vec::new()).unwrap(), 0);
        assert_eq!(env::current_dir().unwrap(), before);
        assert!(cd(&mut state, &["-"], &mut Vec::new()).is_err());
    }
}
