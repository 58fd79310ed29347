//! Captured Go expressions.

use crate::{Cursor, ScanError};
use source_map::{Position, Range};

/// A span of embedded Go code and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expression {
    /// The expression text.
    pub value: String,
    /// Where `value` was found, or where it would sit after a rewrite.
    pub range: Range,
}

impl Expression {
    /// Creates a new expression.
    pub fn new(value: impl Into<String>, from: Position, to: Position) -> Self {
        Self {
            value: value.into(),
            range: Range::new(from, to),
        }
    }
}

/// Runs a text-producing sub-scan and wraps its output in an [`Expression`]
/// whose range covers everything the sub-scan consumed.
///
/// `Ok(None)` means the sub-scan did not match.
pub fn expression_of<'src, T, F>(
    cursor: &mut Cursor<'src>,
    scan: F,
) -> Result<Option<Expression>, ScanError>
where
    T: Into<String>,
    F: FnOnce(&mut Cursor<'src>) -> Result<Option<T>, ScanError>,
{
    let from = cursor.position();
    let Some(value) = scan(cursor)? else {
        return Ok(None);
    };
    Ok(Some(Expression::new(value, from, cursor.position())))
}
