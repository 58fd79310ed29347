//! A position-tracking cursor over template source.

use source_map::{LineIndex, Position};

/// A cursor into source text that keeps its line and column in step with
/// its byte offset.
///
/// Sub-scanners take `&mut Cursor` and must leave it where they found it
/// when they do not match.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    position: Position,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: Position::default(),
        }
    }

    /// Creates a cursor at byte `offset` of `source`.
    ///
    /// Returns `None` if the offset is out of bounds or not on a character
    /// boundary.
    pub fn at(source: &'src str, offset: usize) -> Option<Self> {
        let position = LineIndex::new(source).position(source, offset)?;
        Some(Self { source, position })
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the current position.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn index(&self) -> usize {
        self.position.index as usize
    }

    /// Returns the text from the cursor to the end of the source.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.source[self.index()..]
    }

    /// Returns true if there is no more text.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.index() >= self.source.len()
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position = self.position.advance_char(c);
        Some(c)
    }

    /// Consumes one character if it satisfies `pred`.
    pub fn bump_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => self.bump(),
            _ => None,
        }
    }

    /// Consumes `expected` if the remaining text starts with it.
    pub fn eat(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            self.position = self.position.advance(expected);
            true
        } else {
            false
        }
    }

    /// Consumes a run of ASCII spaces, returning how many were consumed.
    pub fn eat_spaces(&mut self) -> usize {
        let count = self.rest().bytes().take_while(|&b| b == b' ').count();
        self.position = Position::new(
            self.position.index + count as u64,
            self.position.line,
            self.position.col + count as u32,
        );
        count
    }

    /// Moves the cursor back to a position it previously reported.
    #[inline]
    pub fn reset(&mut self, position: Position) {
        debug_assert!(position.index as usize <= self.source.len());
        self.position = position;
    }

    /// Returns the text consumed since `start`.
    #[inline]
    pub fn slice_from(&self, start: Position) -> &'src str {
        &self.source[start.index as usize..self.index()]
    }
}
