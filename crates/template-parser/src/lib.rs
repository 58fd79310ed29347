//! Go expression scanning for template sources.
//!
//! This crate extracts embedded Go expressions from template text:
//! - a position-tracking [`Cursor`]
//! - a literal lexer for Go rune and string literals
//! - balanced-delimiter scanners for `{ … }` and `( … )` expressions
//!
//! # Example
//!
//! ```
//! use template_parser::{scan_brace_expression, Cursor};
//!
//! let source = r#"<p>{ strings.Join(names, "}, {") }</p>"#;
//! let mut cursor = Cursor::at(source, 4).unwrap();
//!
//! let expr = scan_brace_expression(&mut cursor).unwrap();
//! assert_eq!(expr.value, r#" strings.Join(names, "}, {")"#);
//! assert_eq!(cursor.rest(), " }</p>");
//! ```

mod cursor;
mod error;
mod expression;
pub mod literal;
mod scanner;

pub use cursor::Cursor;
pub use error::{Closer, ScanError, ScanErrorKind};
pub use expression::{expression_of, Expression};
pub use scanner::{
    scan_brace_expression, scan_braced, scan_call_args, scan_paren_expression, ExpressionScanner,
};
pub use source_map::{Position, Range};
