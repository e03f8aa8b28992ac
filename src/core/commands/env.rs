use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(
        &self,
        state: &mut ShellState,
        _args: &[String],
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        for (name, value) in state.env.iter() {
            writeln!(out, "{}={}", name, value)?;
        }
        out.flush()?;
        Ok(0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetenvCommand;

impl Command for SetenvCommand {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        _out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        let [name, value] = args else {
            return Err(CommandError::InvalidArguments(
                "Usage: setenv VARIABLE VALUE".into(),
            ));
        };

        state
            .env
            .set(name, value)
            .map_err(|e| CommandError::InvalidArguments(e.to_string()))?;
        Ok(0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnsetenvCommand;

impl Command for UnsetenvCommand {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        _out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        let [name] = args else {
            return Err(CommandError::InvalidArguments(
                "Usage: unsetenv VARIABLE".into(),
            ));
        };

        state.env.unset(name);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;

    fn setup_state() -> ShellState {
        ShellState::new("hsh", Environment::from_strarr(["B=2", "A=1"]))
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_env_lists_sorted_entries() {
        let mut state = setup_state();
        let mut out = Vec::new();
        assert_eq!(EnvCommand.execute(&mut state, &[], &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "A=1\nB=2\n");
    }

    #[test]
    fn test_setenv_inserts_and_overwrites() -> Result<(), CommandError> {
        let mut state = setup_state();
        SetenvCommand.execute(&mut state, &strings(&["C", "3"]), &mut Vec::new())?;
        SetenvCommand.execute(&mut state, &strings(&["A", "one"]), &mut Vec::new())?;
        assert_eq!(state.env.get("C"), Some("3"));
        assert_eq!(state.env.get("A"), Some("one"));
        Ok(())
    }

    #[test]
    fn test_setenv_errors() {
        let mut state = setup_state();
        for args in [&["A"][..], &["A", "1", "2"][..], &[][..]] {
            let err = SetenvCommand
                .execute(&mut state, &strings(args), &mut Vec::new())
                .unwrap_err();
            assert!(matches!(err, CommandError::InvalidArguments(_)));
        }

        let err = SetenvCommand
            .execute(&mut state, &strings(&["X=Y", "1"]), &mut Vec::new())
            .unwrap_err();
        assert_eq!(err.status(), 2);
        assert_eq!(state.env.get("X"), None);
    }

    #[test]
    fn test_unsetenv() -> Result<(), CommandError> {
        let mut state = setup_state();
        UnsetenvCommand.execute(&mut state, &strings(&["A"]), &mut Vec::new())?;
        UnsetenvCommand.execute(&mut state, &strings(&["MISSING"]), &mut Vec::new())?;
        assert_eq!(state.env.get("A"), None);

        assert!(UnsetenvCommand
            .execute(&mut state, &[], &mut Vec::new())
            .is_err());
        Ok(())
    }
}
