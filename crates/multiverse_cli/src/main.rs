//! Multiverse chess CLI
//!
//! List presets, print starting positions, and replay move sequences.
//! Set `RUST_LOG=multiverse_core=debug` to trace every applied move.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    cli::run(cli::Cli::parse())
}
