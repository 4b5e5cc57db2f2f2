//! Library side of the `jsz-print` binary: argument parsing, script document
//! loading and tracing setup.

pub mod args;
pub mod document;
pub mod tracing_config;

use anyhow::{Context, Result};

use args::CliArgs;
use document::ScriptDocument;

/// Load the document named by `args` and print it.
pub fn run(args: &CliArgs) -> Result<String> {
    let document = ScriptDocument::read(args.file.as_deref())?;
    print_document(&document, args)
}

pub fn print_document(document: &ScriptDocument, args: &CliArgs) -> Result<String> {
    let names = document.interner()?;
    let options = args.printer_options();
    jsz_emitter::print_to_string(&document.body, &names, &options)
        .context("failed to print script")
}
