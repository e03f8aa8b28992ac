use std::io::{ErrorKind, Read};

use super::LineSource;
use crate::error::ShellError;

/// Bytes requested from the underlying stream per read.
pub const CHUNK_SIZE: usize = 8192;

/// Line source for pipes, files and scripts.
///
/// The whole remaining stream is read on the first call and cut into lines
/// afterwards. Children share the stream, so nothing may be left unread when
/// one of them starts; the result also does not depend on how the stream
/// happens to deliver its bytes.
pub struct ChunkReader<R> {
    inner: R,
    buffer: Vec<u8>,
    consumed: usize,
    eof: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            consumed: 0,
            eof: false,
        }
    }

    /// Appends the next chunk, returning how many bytes arrived.
    fn fill(&mut self) -> Result<usize, ShellError> {
        let len = self.buffer.len();
        if self.buffer.capacity() - len < CHUNK_SIZE {
            // Doubles once the buffer outgrows a single chunk.
            self.buffer.try_reserve(len.max(CHUNK_SIZE))?;
        }
        self.buffer.resize(len + CHUNK_SIZE, 0);

        loop {
            match self.inner.read(&mut self.buffer[len..]) {
                Ok(n) => {
                    self.buffer.truncate(len + n);
                    return Ok(n);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buffer.truncate(len);
                    return Err(e.into());
                }
            }
        }
    }

    /// Reads until end-of-stream.
    fn sweep(&mut self) -> Result<(), ShellError> {
        while self.fill()? > 0 {}
        self.eof = true;
        Ok(())
    }

    fn take_line(&mut self, end: usize, next: usize) -> String {
        let line = String::from_utf8_lossy(&self.buffer[self.consumed..end]).into_owned();
        self.consumed = next;
        line
    }
}

impl<R: Read> LineSource for ChunkReader<R> {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        if !self.eof {
            self.sweep()?;
        }

        let rest = &self.buffer[self.consumed..];
        if rest.is_empty() {
            return Ok(None);
        }

        let line = match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                let end = self.consumed + pos;
                self.take_line(end, end + 1)
            }
            None => {
                let end = self.buffer.len();
                self.take_line(end, end)
            }
        };
        Ok(Some(line))
    }
}
