use std::io::Write;

use log::trace;

use super::environment::EnvironmentHandler;
use super::executor::CommandHandler;
use crate::input::tokenizer::{self, DELIMITERS};
use crate::input::LineSource;

/// Status left behind when the input itself can no longer be read.
pub const READ_FAILURE_STATUS: i32 = 2;

/// Drops the first word starting with `#` and everything after it.
fn strip_comment(mut tokens: Vec<String>) -> Vec<String> {
    if let Some(pos) = tokens.iter().position(|t| t.starts_with('#')) {
        tokens.truncate(pos);
    }
    tokens
}

impl<O: Write, E: Write> super::Shell<O, E> {
    /// Reads and handles lines until end-of-stream or `exit`, returning the
    /// last recorded status.
    pub fn run(&mut self, source: &mut dyn LineSource) -> i32 {
        while self.state.running {
            source.sync(&self.state);

            let line = match source.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    self.report_error(e);
                    self.state.status = READ_FAILURE_STATUS;
                    break;
                }
            };

            self.interpret(&line);
            self.state.lineno += 1;
        }

        self.state.status
    }

    /// Runs a startup file with its own line numbering.
    pub fn source(&mut self, source: &mut dyn LineSource) -> i32 {
        let lineno = std::mem::replace(&mut self.state.lineno, 1);
        let status = self.run(source);
        self.state.lineno = lineno;
        status
    }

    /// Handles one line: tokenize, drop comments, expand, dispatch.
    pub fn interpret(&mut self, line: &str) {
        let Some(tokens) = tokenizer::split(line, DELIMITERS, 0) else {
            return;
        };

        let tokens = strip_comment(tokens);
        if tokens.is_empty() {
            trace!("line {} is a comment", self.state.lineno);
            return;
        }

        let tokens = self.state.aliases.expand_command(tokens);
        let tokens = self.expand_tokens(tokens);
        if tokens.is_empty() {
            return;
        }

        self.dispatch(&tokens);
    }
}
