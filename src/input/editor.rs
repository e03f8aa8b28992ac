use std::path::PathBuf;

use log::{debug, warn};
use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::{LineSource, ShellCompleter};
use crate::core::state::ShellState;
use crate::error::ShellError;

pub const PROMPT: &str = "($) ";

/// Line source for a terminal, with prompt, history and completion.
pub struct EditorSource {
    editor: Editor<ShellCompleter, FileHistory>,
    history_path: Option<PathBuf>,
}

impl EditorSource {
    pub fn new(history_path: Option<PathBuf>) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));
        editor.set_auto_add_history(true);

        if let Some(path) = &history_path {
            if let Err(e) = editor.load_history(path) {
                debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!("couldn't save history to {}: {}", path.display(), e);
            }
        }
    }
}

impl Drop for EditorSource {
    fn drop(&mut self) {
        self.save_history();
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => return Ok(Some(line)),
                // Ctrl-C drops the pending edit and prompts again
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    println!();
                    return Ok(None);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn sync(&mut self, state: &ShellState) {
        if let Some(helper) = self.editor.helper_mut() {
            let path_var = state.env.get("PATH").unwrap_or("");
            helper.update(path_var, state.aliases.iter().map(|(name, _)| name));
        }
    }
}
