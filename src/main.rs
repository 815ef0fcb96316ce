//! CLI entry point for the grid tiling tool

use clap::Parser;
use polygrid::io::cli::{Cli, TileRunner};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

// Completion message is the tool's only regular console output
#[allow(clippy::print_stdout)]
fn main() -> polygrid::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let mut runner = TileRunner::from_cli(&cli)?;
    let summary = runner.run()?;

    println!("Grids saved in '{}'", summary.output.display());
    Ok(())
}
