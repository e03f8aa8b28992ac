use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AliasCommand;

/// Drops one pair of matching outer quotes. Lines are split on blanks before
/// any builtin sees them, so a quoted value containing a space arrives in
/// pieces: `alias ll='ls -la'` defines `ll` as `'ls` and looks up `-la'`.
fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('\'') && value.ends_with('\''))
            || (value.starts_with('"') && value.ends_with('"')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

impl Command for AliasCommand {
    /// Defines `name=value` arguments and prints bare names. Every argument is
    /// processed; the first unknown name is reported afterwards.
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        if args.is_empty() {
            for (name, value) in state.aliases.iter() {
                writeln!(out, "{}='{}'", name, value)?;
            }
            return Ok(0);
        }

        let mut missing = None;
        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) if !name.is_empty() => {
                    state.aliases.add(name, strip_quotes(value));
                }
                _ => match state.aliases.get(arg) {
                    Some(value) => writeln!(out, "{}='{}'", arg, value)?,
                    None => {
                        missing.get_or_insert_with(|| arg.clone());
                    }
                },
            }
        }

        match missing {
            Some(name) => Err(CommandError::NotFound(name)),
            None => Ok(0),
        }
    }
}
