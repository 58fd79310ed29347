//! Writing expressions into generated code while building the source map.

use crate::rewrite::rewrite_expression;
use crate::writer::RangeWriter;
use source_map::{Position, Range, SourceMap};
use template_parser::Expression;

/// Options for generation.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Whether to record source-map entries for written expressions.
    pub source_maps: bool,
    /// Whether to replace `templ.Context()` calls in written expressions.
    pub rewrite_context: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            source_maps: true,
            rewrite_context: true,
        }
    }
}

/// The result of generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// The generated Go code.
    pub code: String,
    /// The source map for position mapping.
    pub source_map: SourceMap,
}

/// Writes generated code for one template file.
#[derive(Debug, Default)]
pub struct Generator {
    writer: RangeWriter,
    source_map: SourceMap,
    options: GeneratorOptions,
}

impl Generator {
    /// Creates a generator with the given options.
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            writer: RangeWriter::new(),
            source_map: SourceMap::new(),
            options,
        }
    }

    /// Returns the position the next write will start at.
    #[inline]
    pub fn position(&self) -> Position {
        self.writer.position()
    }

    /// Returns the source map built so far.
    #[inline]
    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Returns the code written so far.
    #[inline]
    pub fn code(&self) -> &str {
        self.writer.as_str()
    }

    /// Writes generated text that has no counterpart in the template.
    pub fn write(&mut self, text: &str) -> Range {
        self.writer.write(text)
    }

    /// Writes a Go expression taken from the template.
    ///
    /// The mapping is keyed by the expression's original source range and
    /// points at the text actually written, after any rewrite. Expressions
    /// written verbatim are mapped character by character.
    pub fn write_expression(&mut self, expr: &Expression) -> Range {
        let written = if self.options.rewrite_context {
            rewrite_expression(expr)
        } else {
            expr.clone()
        };
        let target = self.writer.write(&written.value);

        if self.options.source_maps {
            if written.value == expr.value {
                self.source_map.record_text(expr.range, target, &expr.value);
            } else {
                self.source_map.record(expr.range, target);
            }
        }

        tracing::debug!(
            source = ?expr.range,
            target = ?target,
            rewritten = written.value != expr.value,
            "wrote expression"
        );
        target
    }

    /// Finishes generation, returning the code and its source map.
    pub fn finish(self) -> GenerateResult {
        GenerateResult {
            code: self.writer.into_string(),
            source_map: self.source_map,
        }
    }
}
