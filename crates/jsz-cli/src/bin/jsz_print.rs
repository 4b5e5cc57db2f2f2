use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use jsz_cli::args::CliArgs;

fn main() -> Result<()> {
    // No-op unless JSZ_LOG or RUST_LOG is set.
    jsz_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = jsz_cli::run(&args)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n").context("failed to write output")?;
    }
    Ok(())
}
