//! Line-oriented console over any reader/writer pair.

use std::io::{BufRead, Result as IoResult, Write};

use crate::storage::codec::read_line_lossy;

/// Blocking, line-based console.
///
/// Generic over its streams so sessions can be driven from a `Cursor` in
/// tests and from locked stdin/stdout in the binary.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than an error.
    pub fn read_line(&mut self) -> IoResult<Option<String>> {
        read_line_lossy(&mut self.input)
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> IoResult<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes `text` with no newline, flushes, and reads the answer.
    pub fn prompt(&mut self, text: &str) -> IoResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Flushes pending output.
    pub fn flush(&mut self) -> IoResult<()> {
        self.output.flush()
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
