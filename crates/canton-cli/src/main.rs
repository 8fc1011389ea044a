//! canton - lay out stars in a canton and draw the flag
//!
//! Usage:
//!   canton [N] [-o bandera.svg]     Render a flag with N stars (default 50)
//!   canton render [N] [options]     Same, spelled out
//!   canton pattern [N] [--json]     Print the chosen star layout
//!   canton inspect <svg> [--json]   Summarize an SVG's shapes and colors
//!
//! Set `RUST_LOG=debug` to trace the layout search.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{cmd_inspect, cmd_pattern, cmd_render, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => cmd_render(&args),
        Some(Commands::Pattern(args)) => cmd_pattern(&args),
        Some(Commands::Inspect(args)) => cmd_inspect(&args),
        None => cmd_render(&cli.render),
    }
}
