//! Position and range types shared by source and generated text.

/// A position in a text.
///
/// `index` is a byte offset. `line` and `col` are 0-indexed, and `col` counts
/// Unicode scalar values since the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Byte offset from the start of the text.
    pub index: u64,
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column within the line.
    pub col: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub fn new(index: u64, line: u32, col: u32) -> Self {
        Self { index, line, col }
    }

    /// Returns the position after `c`.
    #[inline]
    pub fn advance_char(self, c: char) -> Self {
        let index = self.index + c.len_utf8() as u64;
        if c == '\n' {
            Self {
                index,
                line: self.line + 1,
                col: 0,
            }
        } else {
            Self {
                index,
                line: self.line,
                col: self.col + 1,
            }
        }
    }

    /// Returns the position after all of `text`.
    pub fn advance(self, text: &str) -> Self {
        text.chars().fold(self, Position::advance_char)
    }

    /// Returns the line/column pair of this position.
    #[inline]
    pub fn line_col(&self) -> crate::LineCol {
        crate::LineCol::new(self.line, self.col)
    }
}

/// A half-open range `[from, to)` within a single text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// The start position (inclusive).
    pub from: Position,
    /// The end position (exclusive).
    pub to: Position,
}

impl Range {
    /// Creates a new range.
    #[inline]
    pub fn new(from: Position, to: Position) -> Self {
        debug_assert!(from.index <= to.index, "range ends before it starts");
        Self { from, to }
    }

    /// Creates the range covered by `text` when it starts at `from`.
    pub fn of_text(from: Position, text: &str) -> Self {
        Self {
            from,
            to: from.advance(text),
        }
    }

    /// Returns true if this range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from.index == self.to.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_single_line() {
        let pos = Position::default().advance("hello");
        assert_eq!(pos, Position::new(5, 0, 5));
    }

    #[test]
    fn test_advance_multiline() {
        let pos = Position::new(3, 1, 3).advance("ab\ncd\ne");
        assert_eq!(pos, Position::new(10, 3, 1));
    }

    #[test]
    fn test_advance_counts_chars_not_bytes_for_col() {
        // 'é' is two bytes, one column.
        let pos = Position::default().advance("é!");
        assert_eq!(pos, Position::new(3, 0, 2));
    }

    #[test]
    fn test_range_of_text() {
        let range = Range::of_text(Position::new(10, 2, 4), "x\ny");
        assert_eq!(range.from, Position::new(10, 2, 4));
        assert_eq!(range.to, Position::new(13, 3, 1));
        assert!(!range.is_empty());
    }

    #[test]
    fn test_range_of_empty_text() {
        let range = Range::of_text(Position::new(4, 0, 4), "");
        assert!(range.is_empty());
        assert_eq!(range.to, Position::new(4, 0, 4));
    }
}
