//! Printer configuration.

use jsz_common::limits::{BLOCK_SUMMARY_STATEMENT_LIMIT, DEFAULT_INDENT};
use serde::Deserialize;

/// Options for a print.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrinterOptions {
    /// Omit all optional whitespace and separators.
    pub compact: bool,
    /// Summarize long blocks: print the first `truncate_limit` statements and an
    /// elision marker.
    pub truncate: bool,
    pub truncate_limit: usize,
    /// Indentation unit for pretty output.
    pub indent: String,
    /// Quote every string literal with `"` regardless of its content.
    pub force_double_quote: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            compact: false,
            truncate: false,
            truncate_limit: BLOCK_SUMMARY_STATEMENT_LIMIT,
            indent: DEFAULT_INDENT.to_string(),
            force_double_quote: false,
        }
    }
}

impl PrinterOptions {
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    pub fn pretty() -> Self {
        Self::default()
    }

    /// Enable summary output with the given statement limit.
    #[must_use]
    pub fn with_truncation(mut self, limit: usize) -> Self {
        self.truncate = true;
        self.truncate_limit = limit;
        self
    }
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
