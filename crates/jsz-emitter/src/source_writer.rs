//! Output sink for the printer.
//!
//! `TextOutput` is the contract the printer writes through: literal text,
//! optional text that disappears in compact mode, mandatory newlines and an
//! indentation level. `SourceWriter` is the standard implementation over any
//! `fmt::Write`.

use std::fmt::{self, Write};

use jsz_common::limits::DEFAULT_INDENT;

/// Append-only destination for printed JavaScript.
pub trait TextOutput {
    /// Append literal text.
    fn print(&mut self, text: &str) -> fmt::Result;

    /// Append text that is only wanted in pretty output.
    fn print_opt(&mut self, text: &str) -> fmt::Result;

    /// Append a mandatory line break.
    fn newline(&mut self) -> fmt::Result;

    fn indent_in(&mut self);

    fn indent_out(&mut self);

    fn is_compact(&self) -> bool;
}

/// Writes printer output to a `fmt::Write` target.
///
/// Indentation is written lazily, at the first text printed on a line, so
/// blank lines carry no trailing whitespace. Compact writers never indent.
#[derive(Debug)]
pub struct SourceWriter<W = String> {
    out: W,
    compact: bool,
    indent_unit: String,
    indent_level: usize,
    at_line_start: bool,
}

impl SourceWriter<String> {
    pub fn new(compact: bool) -> Self {
        Self::with_output(String::new(), compact)
    }

    pub fn pretty() -> Self {
        Self::new(false)
    }

    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Consume the writer and return the printed text.
    pub fn finish(self) -> String {
        self.out
    }
}

impl<W: Write> SourceWriter<W> {
    pub fn with_output(out: W, compact: bool) -> Self {
        Self {
            out,
            compact,
            indent_unit: DEFAULT_INDENT.to_string(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Use `unit` for each indentation level instead of two spaces.
    #[must_use]
    pub fn with_indent(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn write_indent(&mut self) -> fmt::Result {
        if !self.compact {
            for _ in 0..self.indent_level {
                self.out.write_str(&self.indent_unit)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> TextOutput for SourceWriter<W> {
    fn print(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        if self.at_line_start {
            self.write_indent()?;
            self.at_line_start = false;
        }
        self.out.write_str(text)
    }

    fn print_opt(&mut self, text: &str) -> fmt::Result {
        if self.compact {
            return Ok(());
        }
        self.print(text)
    }

    fn newline(&mut self) -> fmt::Result {
        self.at_line_start = true;
        self.out.write_char('\n')
    }

    fn indent_in(&mut self) {
        self.indent_level += 1;
    }

    fn indent_out(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn is_compact(&self) -> bool {
        self.compact
    }
}

#[cfg(test)]
#[path = "../tests/source_writer.rs"]
mod tests;
