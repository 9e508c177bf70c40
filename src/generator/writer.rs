//! Indentation aware output writer.

use std::io::Write;
use crate::config::INDENT;
use crate::generator::error::{GenerateError, GenerateResult};

/// Output writer. Tracks the indentation depth of the code being written.
pub struct Writer<W> where W: Write {
    output  : W,
    depth   : usize,
}

impl<W> Writer<W> where W: Write {
    /// Creates a new writer instance.
    pub fn new(output: W) -> Self {
        Writer {
            output,
            depth: 0,
        }
    }
    /// Writes the given text verbatim.
    pub fn write(self: &mut Self, text: &str) -> GenerateResult {
        self.output.write_all(text.as_bytes()).map_err(|err| GenerateError::io(&err))
    }
    /// Writes indentation for the current depth.
    pub fn indentation(self: &mut Self) -> GenerateResult {
        for _ in 0..self.depth {
            self.write(INDENT)?;
        }
        Ok(())
    }
    /// Increases the indentation depth by one level.
    pub fn indent(self: &mut Self) {
        self.depth += 1;
    }
    /// Decreases the indentation depth by one level.
    pub fn outdent(self: &mut Self) {
        self.depth = self.depth.saturating_sub(1);
    }
    /// Flushes and converts the writer into the underlying output.
    pub fn into_inner(mut self: Self) -> GenerateResult<W> {
        self.output.flush().map_err(|err| GenerateError::io(&err))?;
        Ok(self.output)
    }
}
