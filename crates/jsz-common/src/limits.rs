//! Centralized limits and thresholds for the printer.

/// Number of statements printed inside a block when summary (truncated)
/// output is requested.
///
/// Blocks with more statements print the first `BLOCK_SUMMARY_STATEMENT_LIMIT`
/// of them followed by an elision marker.
///
/// ```javascript
/// function f() {
///   a();
///   b();
///   c();
///   [...]
/// }
/// ```
pub const BLOCK_SUMMARY_STATEMENT_LIMIT: usize = 3;

/// Marker printed in place of the statements a truncated block omits.
pub const ELISION_MARKER: &str = "[...]";

/// Default indentation unit for pretty output.
pub const DEFAULT_INDENT: &str = "  ";
