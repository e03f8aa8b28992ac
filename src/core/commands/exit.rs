use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        _out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        let status = match args.first() {
            None => state.status,
            Some(arg) => {
                let code: u64 = arg.parse().map_err(|_| {
                    CommandError::InvalidArguments(format!("Illegal number: {}", arg))
                })?;
                (code % 256) as i32
            }
        };

        state.request_exit(status);
        Ok(status)
    }
}
