use std::io::Write;

mod alias;
mod cd;
mod env;
mod exit;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::{EnvCommand, SetenvCommand, UnsetenvCommand};
pub use exit::ExitCommand;

use super::state::ShellState;

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    InvalidArguments(String),
    ChangeDir(String),
    ExecutionError(String),
    IoError(std::io::Error),
}

impl CommandError {
    /// Status recorded for the command that failed this way.
    pub fn status(&self) -> i32 {
        match self {
            CommandError::InvalidArguments(_) | CommandError::ChangeDir(_) => 2,
            CommandError::NotFound(_)
            | CommandError::ExecutionError(_)
            | CommandError::IoError(_) => 1,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(name) => write!(f, "{} not found", name),
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::ChangeDir(dir) => write!(f, "can't cd to {}", dir),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// A command implemented inside the shell process.
pub trait Command {
    /// Runs with the words after the command name and returns its status.
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<i32, CommandError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandType {
    Exit(ExitCommand),
    Env(EnvCommand),
    Setenv(SetenvCommand),
    Unsetenv(UnsetenvCommand),
    Cd(CdCommand),
    Alias(AliasCommand),
}

/// The builtin table, fixed at compile time.
pub const BUILTINS: [(&str, CommandType); 6] = [
    ("exit", CommandType::Exit(ExitCommand)),
    ("env", CommandType::Env(EnvCommand)),
    ("setenv", CommandType::Setenv(SetenvCommand)),
    ("unsetenv", CommandType::Unsetenv(UnsetenvCommand)),
    ("cd", CommandType::Cd(CdCommand)),
    ("alias", CommandType::Alias(AliasCommand)),
];

impl CommandType {
    pub fn lookup(name: &str) -> Option<CommandType> {
        BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, command)| *command)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|(name, _)| *name)
    }
}

impl Command for CommandType {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(state, args, out),
            CommandType::Env(cmd) => cmd.execute(state, args, out),
            CommandType::Setenv(cmd) => cmd.execute(state, args, out),
            CommandType::Unsetenv(cmd) => cmd.execute(state, args, out),
            CommandType::Cd(cmd) => cmd.execute(state, args, out),
            CommandType::Alias(cmd) => cmd.execute(state, args, out),
        }
    }
}
