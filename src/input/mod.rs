mod completer;
mod editor;
mod reader;
pub mod tokenizer;

pub use completer::ShellCompleter;
pub use editor::EditorSource;
pub use reader::ChunkReader;

use crate::core::state::ShellState;
use crate::error::ShellError;

/// A supplier of command lines, one per call.
pub trait LineSource {
    /// `Ok(None)` is end-of-stream; the terminator is never part of the line.
    fn read_line(&mut self) -> Result<Option<String>, ShellError>;

    /// Called before each read so interactive sources can follow state changes.
    fn sync(&mut self, _state: &ShellState) {}
}
