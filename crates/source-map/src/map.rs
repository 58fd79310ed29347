//! Bidirectional source map between template source and generated output.

use crate::{LineCol, Position, Range};
use rustc_hash::FxHashMap;

/// A single correspondence between a source range and a generated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mapping {
    /// The range in the template source.
    pub source: Range,
    /// The range in the generated output.
    pub target: Range,
}

/// A source map for one generated file.
///
/// Mappings are only ever appended. Lookups are exact on `(line, col)`: a
/// point that was never recorded is not found, and nothing is interpolated.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceMap {
    /// Mappings in insertion order.
    mappings: Vec<Mapping>,
    source_to_target: FxHashMap<LineCol, Position>,
    target_to_source: FxHashMap<LineCol, Position>,
}

impl SourceMap {
    /// Creates a new empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of mappings in this source map.
    #[inline]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if this source map has no mappings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Returns an iterator over all mappings, in the order they were recorded.
    pub fn mappings(&self) -> impl Iterator<Item = &Mapping> {
        self.mappings.iter()
    }

    /// Records that `source` was emitted as `target`.
    ///
    /// Only the start points are indexed. A later record at the same point
    /// replaces the earlier lookup result.
    pub fn record(&mut self, source: Range, target: Range) {
        self.mappings.push(Mapping { source, target });
        self.index_point(source.from, target.from);
    }

    /// Records that `text`, found at `source`, was copied verbatim to `target`.
    ///
    /// The start point and every character of `text` are indexed in both
    /// directions, so points inside the text resolve as well as its start.
    /// An empty `text` still indexes its start point.
    pub fn record_text(&mut self, source: Range, target: Range, text: &str) {
        self.mappings.push(Mapping { source, target });

        let mut src = source.from;
        let mut tgt = target.from;
        self.index_point(src, tgt);

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if chars.peek().is_none() {
                break;
            }
            src = src.advance_char(c);
            tgt = tgt.advance_char(c);
            self.index_point(src, tgt);
        }
    }

    /// Returns the generated position recorded for the source point `(line, col)`.
    pub fn target_position_from_source(&self, line: u32, col: u32) -> Option<Position> {
        self.source_to_target
            .get(&LineCol::new(line, col))
            .copied()
    }

    /// Returns the source position recorded for the generated point `(line, col)`.
    pub fn source_position_from_target(&self, line: u32, col: u32) -> Option<Position> {
        self.target_to_source
            .get(&LineCol::new(line, col))
            .copied()
    }

    fn index_point(&mut self, source: Position, target: Position) {
        self.source_to_target.insert(source.line_col(), target);
        self.target_to_source.insert(target.line_col(), source);
    }
}
