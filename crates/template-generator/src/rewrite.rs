//! Rewriting of `templ.Context()` calls inside expressions.
//!
//! Generated render functions hold the request context in a local variable,
//! so calls to `templ.Context()` in user expressions are replaced with that
//! variable. Occurrences inside string and rune literals are left alone.

use source_map::{Position, Range};
use template_parser::literal::{is_literal_start, literal};
use template_parser::{Cursor, Expression};

/// The call that user code writes to reach the render context.
pub const CONTEXT_CALL: &str = "templ.Context()";

/// The generated variable holding the render context.
pub const CONTEXT_VAR: &str = "templ_7745c5c3_Ctx";

/// Replaces every `templ.Context()` outside literals with the context variable.
///
/// Returns the input unchanged if there is nothing to replace, or if the
/// value contains a literal that never closes. Otherwise the range end is
/// recomputed from the range start and the new value.
pub fn rewrite_expression(expr: &Expression) -> Expression {
    match substitute(&expr.value, CONTEXT_CALL, CONTEXT_VAR) {
        Some(value) => {
            let range = Range::new(expr.range.from, end_of(expr.range.from, &value));
            Expression { value, range }
        }
        None => expr.clone(),
    }
}

/// Returns the substituted text, or `None` if the text should be kept as-is.
fn substitute(text: &str, target: &str, replacement: &str) -> Option<String> {
    if !text.contains(target) {
        return None;
    }

    let mut cursor = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut replaced = false;

    while let Some(c) = cursor.peek() {
        if let Some(lit) = literal(&mut cursor) {
            out.push_str(lit);
            continue;
        }
        if is_literal_start(c) {
            tracing::trace!(
                at = cursor.index(),
                "unterminated literal in expression, leaving it unchanged"
            );
            return None;
        }
        if cursor.eat(target) {
            out.push_str(replacement);
            replaced = true;
            continue;
        }
        cursor.bump();
        out.push(c);
    }

    replaced.then_some(out)
}

/// Computes where `value` ends when it starts at `from`.
fn end_of(from: Position, value: &str) -> Position {
    let index = from.index + value.len() as u64;
    match value.rfind('\n') {
        Some(last) => Position::new(
            index,
            from.line + value.matches('\n').count() as u32,
            value[last + 1..].chars().count() as u32,
        ),
        None => Position::new(index, from.line, from.col + value.chars().count() as u32),
    }
}
