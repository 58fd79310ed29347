//! Scan error types.

use source_map::Position;
use thiserror::Error;

/// An error that stopped an expression scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {}, col {}", .position.line, .position.col)]
pub struct ScanError {
    /// The kind of error.
    pub kind: ScanErrorKind,
    /// Where in the source the error was detected.
    pub position: Position,
}

impl ScanError {
    /// Creates a new scan error.
    pub fn new(kind: ScanErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// The kind of scan error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// More closing delimiters than opening ones.
    #[error("expression: too many closing {}", .closer.plural())]
    DelimiterImbalance {
        /// The closing delimiter that went below zero depth.
        closer: Closer,
    },

    /// Input ended before every opened delimiter was closed.
    #[error("expression: unexpected {} count", .closer.singular())]
    UnterminatedExpression {
        /// The closing delimiter that was still expected.
        closer: Closer,
    },

    /// A required token was missing.
    #[error("expected {expected}")]
    Expected {
        /// What was expected.
        expected: &'static str,
    },
}

/// The closing half of a delimiter pair, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Closer {
    /// `}`
    Brace,
    /// `)`
    Paren,
}

impl Closer {
    fn singular(self) -> &'static str {
        match self {
            Closer::Brace => "brace",
            Closer::Paren => "bracket",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Closer::Brace => "braces",
            Closer::Paren => "brackets",
        }
    }
}
