//! Line index for offset ↔ line/column conversion.

use crate::Position;
use text_size::TextSize;

/// A line and column pair (0-indexed).
///
/// Used as the key of the source map's point indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column.
    pub col: u32,
}

impl LineCol {
    /// Creates a new line/column pair.
    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// An index of line starts, used to place a cursor at an arbitrary offset.
///
/// Offsets are stored as [`TextSize`], so only the first 4 GiB of a text are
/// indexed. Positions past that limit are not found.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[i]` is the byte offset where line `i` begins.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Creates a new line index from text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                let Ok(start) = TextSize::try_from(offset + 1) else {
                    break;
                };
                line_starts.push(start);
            }
        }

        Self { line_starts }
    }

    /// Returns the full position of a byte offset in `text`.
    ///
    /// `text` must be the text this index was built from. Returns `None` if
    /// the offset is past the end, not on a character boundary, or beyond
    /// the 4 GiB limit of the index.
    pub fn position(&self, text: &str, offset: usize) -> Option<Position> {
        if !text.is_char_boundary(offset) {
            return None;
        }
        let line = self.line_of(TextSize::try_from(offset).ok()?);
        let start = u32::from(self.line_starts[line]) as usize;
        let col = text[start..offset].chars().count();

        Some(Position::new(offset as u64, line as u32, col as u32))
    }

    fn line_of(&self, offset: TextSize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }
}
