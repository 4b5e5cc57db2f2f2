use clap::Parser;
use std::path::PathBuf;

use jsz_emitter::PrinterOptions;

/// CLI arguments for the jsz-print binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsz-print",
    version,
    about = "Print a serialized jsz syntax tree as JavaScript"
)]
pub struct CliArgs {
    /// Script document to print (JSON). Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Omit all optional whitespace and separators.
    #[arg(long)]
    pub compact: bool,

    /// Print at most N statements per block, then an elision marker.
    #[arg(long, value_name = "N")]
    pub truncate: Option<usize>,

    /// Spaces per indentation level in pretty output.
    #[arg(long = "indent-width", value_name = "N", default_value_t = 2)]
    pub indent_width: usize,

    /// Quote every string literal with double quotes.
    #[arg(long = "double-quotes")]
    pub double_quotes: bool,
}

impl CliArgs {
    pub fn printer_options(&self) -> PrinterOptions {
        let mut options = PrinterOptions {
            compact: self.compact,
            indent: " ".repeat(self.indent_width),
            force_double_quote: self.double_quotes,
            ..PrinterOptions::default()
        };
        if let Some(limit) = self.truncate {
            options = options.with_truncation(limit);
        }
        options
    }
}
