//! Go code generation support for compiled templates.
//!
//! This crate writes template expressions into generated Go code. It handles:
//! - Tracking the output position of every write
//! - Rewriting `templ.Context()` calls to the generated context variable
//! - Building the source map between template and generated positions
//!
//! # Example
//!
//! ```
//! use template_generator::{Generator, GeneratorOptions};
//! use template_parser::{scan_braced, Cursor};
//!
//! let source = "<p>{ templ.Context().Value(\"user\") }</p>";
//! let mut cursor = Cursor::at(source, 3).unwrap();
//! let expr = scan_braced(&mut cursor).unwrap().unwrap();
//!
//! let mut g = Generator::new(GeneratorOptions::default());
//! g.write("_ = ");
//! g.write_expression(&expr);
//! let result = g.finish();
//!
//! assert_eq!(result.code, "_ = templ_7745c5c3_Ctx.Value(\"user\")");
//! assert!(result.source_map.target_position_from_source(0, 5).is_some());
//! ```

mod generator;
mod rewrite;
mod writer;

pub use generator::{GenerateResult, Generator, GeneratorOptions};
pub use rewrite::{rewrite_expression, CONTEXT_CALL, CONTEXT_VAR};
pub use writer::RangeWriter;
