//! Position tracking and source mapping for the template compiler.
//!
//! This crate provides the position types shared by template source text and
//! generated Go code, and a source map that records which generated
//! positions came from which template positions.

mod line_index;
mod map;
mod position;

pub use line_index::{LineCol, LineIndex};
pub use map::{Mapping, SourceMap};
pub use position::{Position, Range};
