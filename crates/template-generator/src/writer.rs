//! Output writer that reports where each write landed.

use source_map::{Position, Range};
use std::fmt;

/// Accumulates generated code and tracks the current output position.
#[derive(Debug, Clone, Default)]
pub struct RangeWriter {
    output: String,
    position: Position,
}

impl RangeWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position the next write will start at.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Appends `text` and returns the range it occupies in the output.
    pub fn write(&mut self, text: &str) -> Range {
        let range = Range::of_text(self.position, text);
        self.output.push_str(text);
        self.position = range.to;
        range
    }

    /// Returns the output written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consumes the writer and returns the output.
    pub fn into_string(self) -> String {
        self.output
    }
}

impl fmt::Write for RangeWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        RangeWriter::write(self, s);
        Ok(())
    }
}
