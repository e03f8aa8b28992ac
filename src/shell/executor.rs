use std::io::Write;

use log::debug;

use crate::core::commands::{Command, CommandType};
use crate::path::resolver;
use crate::process::executor::is_invocable;

/// Status for a command that is neither a builtin nor found on disk.
pub const NOT_FOUND_STATUS: i32 = 127;
/// Status for a resolved file that cannot be executed.
pub const PERMISSION_DENIED_STATUS: i32 = 126;

pub(crate) trait CommandHandler {
    /// Runs `tokens` as a builtin, reporting whether one matched.
    fn run_builtin(&mut self, tokens: &[String]) -> bool;
    /// Runs `tokens` as an external program, reporting whether one was found.
    fn run_program(&mut self, tokens: &[String]) -> bool;
    fn dispatch(&mut self, tokens: &[String]);
}

impl<O: Write, E: Write> CommandHandler for super::Shell<O, E> {
    fn run_builtin(&mut self, tokens: &[String]) -> bool {
        let Some((name, args)) = tokens.split_first() else {
            return false;
        };
        let Some(builtin) = CommandType::lookup(name) else {
            return false;
        };

        let result = builtin.execute(&mut self.state, args, &mut self.out);
        self.state.status = match result {
            Ok(status) => status,
            Err(e) => {
                self.report(name, &e);
                e.status()
            }
        };
        self.flush_out();
        true
    }

    fn run_program(&mut self, tokens: &[String]) -> bool {
        let Some(command) = tokens.first() else {
            return false;
        };

        let path_var = self.state.env.get_or_insert("PATH", "").to_string();
        let Some(path) = resolver::resolve(command, &path_var) else {
            return false;
        };

        if !is_invocable(&path) {
            debug!("{} is not an executable regular file", path.display());
            self.report(command, "Permission denied");
            self.state.status = PERMISSION_DENIED_STATUS;
            return true;
        }

        let env = self.state.env.to_strarr();
        self.flush_out();
        self.state.status = match self.executor.execute(&path, tokens, &env) {
            Ok(status) => status,
            Err(e) => {
                self.report(command, &e);
                e.status()
            }
        };
        true
    }

    fn dispatch(&mut self, tokens: &[String]) {
        if self.run_builtin(tokens) || self.run_program(tokens) {
            return;
        }

        if let Some(command) = tokens.first() {
            self.report(command, "not found");
        }
        self.state.status = NOT_FOUND_STATUS;
    }
}
