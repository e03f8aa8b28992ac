use std::fmt::Display;
use std::fs::File;
use std::io::{self, IsTerminal, Stderr, Stdout, Write};
use std::path::Path;

use log::{debug, warn};

mod environment;
mod executor;
mod pipeline;

pub use environment::expand;
pub use executor::{NOT_FOUND_STATUS, PERMISSION_DENIED_STATUS};

use crate::{
    core::{
        config::{ConfigLoader, ConfigPaths},
        env::Environment,
        state::ShellState,
    },
    error::ShellError,
    flags::Flags,
    input::{ChunkReader, EditorSource},
    process::ProcessExecutor,
};

/// One interpreter instance: its state plus where its own output goes.
///
/// Builtins write to `out` and diagnostics go to `err`; children always
/// inherit the process's real standard streams.
pub struct Shell<O: Write = Stdout, E: Write = Stderr> {
    pub(crate) state: ShellState,
    pub(crate) executor: ProcessExecutor,
    pub(crate) out: O,
    pub(crate) err: E,
}

impl Shell {
    pub fn new(state: ShellState) -> Self {
        Self::with_output(state, io::stdout(), io::stderr())
    }

    /// Runs the shell the command line describes and returns its final status.
    pub fn launch(flags: &Flags, argv0: &str) -> Result<i32, ShellError> {
        let script = flags.script();
        let interactive = script.is_none() && io::stdin().is_terminal();
        let paths = match ConfigPaths::new() {
            Ok(paths) => Some(paths),
            Err(e) => {
                warn!("{}", e);
                None
            }
        };

        let prog = script.unwrap_or(argv0);
        let mut shell = Shell::new(ShellState::new(prog, Environment::inherit()));
        debug!("starting {} (interactive: {})", prog, interactive);

        let loader = ConfigLoader::new(paths.as_ref());
        let rc = loader.rc_source(flags.get_value("config").map(Path::new), interactive)?;
        if let Some(mut rc) = rc {
            shell.source(&mut rc);
            if !shell.state.running {
                return Ok(shell.state.status);
            }
        }

        let status = match script {
            Some(script) => {
                let file = File::open(script)
                    .map_err(|_| ShellError::ScriptNotFound(script.to_string()))?;
                shell.run(&mut ChunkReader::new(file))
            }
            None if interactive => {
                let mut editor = EditorSource::new(paths.map(|p| p.history_path))?;
                shell.run(&mut editor)
            }
            None => shell.run(&mut ChunkReader::new(io::stdin().lock())),
        };
        Ok(status)
    }
}

impl<O: Write, E: Write> Shell<O, E> {
    pub fn with_output(state: ShellState, out: O, err: E) -> Self {
        Shell {
            state,
            executor: ProcessExecutor::new(),
            out,
            err,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    pub fn out(&self) -> &O {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    /// Writes `<prog>: <lineno>: <command>: <message>` to the error stream.
    pub(crate) fn report(&mut self, command: &str, message: impl Display) {
        self.report_error(format_args!("{}: {}", command, message));
    }

    /// Writes `<prog>: <lineno>: <message>` to the error stream.
    pub(crate) fn report_error(&mut self, message: impl Display) {
        let written = writeln!(
            self.err,
            "{}: {}: {}",
            self.state.prog, self.state.lineno, message
        )
        .and_then(|_| self.err.flush());

        if let Err(e) = written {
            warn!("couldn't write diagnostic: {}", e);
        }
    }

    pub(crate) fn flush_out(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!("couldn't flush output: {}", e);
        }
    }
}
