//! Balanced-delimiter scanning of Go expressions.
//!
//! The scanner reads up to the delimiter that closes an already opened `{` or
//! `(`, counting nested pairs and skipping over string and rune literals so
//! that `{ fmt.Sprint("}") }` ends at the right brace.

use crate::error::{Closer, ScanError, ScanErrorKind};
use crate::expression::Expression;
use crate::literal::{rune_literal, string_literal};
use crate::Cursor;

/// The delimiter pair an [`ExpressionScanner`] balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Delimiter {
    /// `{` … `}`, where the closer may carry one leading space.
    Brace,
    /// `(` … `)`, where the closer may carry any run of leading spaces.
    Paren,
}

impl Delimiter {
    fn open(self) -> &'static str {
        match self {
            Delimiter::Brace => "{",
            Delimiter::Paren => "(",
        }
    }

    fn closer(self) -> Closer {
        match self {
            Delimiter::Brace => Closer::Brace,
            Delimiter::Paren => Closer::Paren,
        }
    }

    /// Consumes a closing delimiter together with its padding.
    fn eat_close(self, cursor: &mut Cursor<'_>) -> bool {
        match self {
            Delimiter::Brace => cursor.eat(" }") || cursor.eat("}"),
            Delimiter::Paren => {
                let start = cursor.position();
                cursor.eat_spaces();
                if cursor.eat(")") {
                    true
                } else {
                    cursor.reset(start);
                    false
                }
            }
        }
    }
}

/// Scans an expression up to the delimiter that balances its opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionScanner {
    delimiter: Delimiter,
    start_depth: i32,
}

impl ExpressionScanner {
    /// A scanner for the inside of `{ … }` whose opener has been consumed.
    pub const fn brace() -> Self {
        Self {
            delimiter: Delimiter::Brace,
            start_depth: 1,
        }
    }

    /// A scanner for the inside of `( … )` whose opener has been consumed.
    pub const fn paren() -> Self {
        Self {
            delimiter: Delimiter::Paren,
            start_depth: 1,
        }
    }

    /// Sets how many openers are considered already open. Defaults to 1.
    pub const fn with_start_depth(mut self, depth: i32) -> Self {
        self.start_depth = depth;
        self
    }

    /// Scans from the cursor until the depth returns to zero.
    ///
    /// On success the cursor is left on the matched closer (before its
    /// padding), which the caller consumes. On error the cursor is restored.
    pub fn scan(&self, cursor: &mut Cursor<'_>) -> Result<Expression, ScanError> {
        let from = cursor.position();
        let result = self.scan_inner(cursor);
        if result.is_err() {
            cursor.reset(from);
        }
        result
    }

    fn scan_inner(&self, cursor: &mut Cursor<'_>) -> Result<Expression, ScanError> {
        let from = cursor.position();
        let closer = self.delimiter.closer();
        let mut depth = self.start_depth;
        let mut value = String::new();

        loop {
            if let Some(lit) = string_literal(cursor).or_else(|| rune_literal(cursor)) {
                value.push_str(lit);
                continue;
            }

            if cursor.eat(self.delimiter.open()) {
                depth += 1;
                value.push_str(self.delimiter.open());
                continue;
            }

            let before_close = cursor.position();
            if self.delimiter.eat_close(cursor) {
                depth -= 1;
                if depth < 0 {
                    return Err(ScanError::new(
                        ScanErrorKind::DelimiterImbalance { closer },
                        cursor.position(),
                    ));
                }
                if depth == 0 {
                    cursor.reset(before_close);
                    break;
                }
                value.push_str(cursor.slice_from(before_close));
                continue;
            }

            match cursor.peek() {
                None | Some(char::REPLACEMENT_CHARACTER) => break,
                Some(c) => {
                    cursor.bump();
                    value.push(c);
                }
            }
        }

        if depth != 0 {
            return Err(ScanError::new(
                ScanErrorKind::UnterminatedExpression { closer },
                cursor.position(),
            ));
        }

        Ok(Expression::new(value, from, cursor.position()))
    }
}

/// Scans the inside of a brace expression; the `{` is already consumed.
pub fn scan_brace_expression(cursor: &mut Cursor<'_>) -> Result<Expression, ScanError> {
    ExpressionScanner::brace().scan(cursor)
}

/// Scans the inside of a parenthesised expression; the `(` is already consumed.
pub fn scan_paren_expression(cursor: &mut Cursor<'_>) -> Result<Expression, ScanError> {
    ExpressionScanner::paren().scan(cursor)
}

/// Scans a whole `{ expression }`, padding included.
///
/// Returns `Ok(None)` without consuming anything if the cursor is not on a
/// (possibly space-padded) `{`. Once the brace is consumed, a missing closer
/// is an error.
pub fn scan_braced(cursor: &mut Cursor<'_>) -> Result<Option<Expression>, ScanError> {
    let start = cursor.position();
    cursor.eat_spaces();
    if !cursor.eat("{") {
        cursor.reset(start);
        return Ok(None);
    }
    cursor.eat_spaces();

    let expr = match scan_brace_expression(cursor) {
        Ok(expr) => expr,
        Err(err) => {
            cursor.reset(start);
            return Err(err);
        }
    };
    if !Delimiter::Brace.eat_close(cursor) {
        let position = cursor.position();
        cursor.reset(start);
        return Err(ScanError::new(
            ScanErrorKind::Expected { expected: "}" },
            position,
        ));
    }
    Ok(Some(expr))
}

/// Scans a call's argument list, `(` through `)`.
///
/// Returns `Ok(None)` if the cursor is not on `(`.
pub fn scan_call_args(cursor: &mut Cursor<'_>) -> Result<Option<Expression>, ScanError> {
    let start = cursor.position();
    if !cursor.eat("(") {
        return Ok(None);
    }

    let expr = match scan_paren_expression(cursor) {
        Ok(expr) => expr,
        Err(err) => {
            cursor.reset(start);
            return Err(err);
        }
    };
    if !Delimiter::Paren.eat_close(cursor) {
        let position = cursor.position();
        cursor.reset(start);
        return Err(ScanError::new(
            ScanErrorKind::Expected { expected: ")" },
            position,
        ));
    }
    Ok(Some(expr))
}
