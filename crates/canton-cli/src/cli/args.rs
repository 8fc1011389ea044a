//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default star count when none is given.
pub const DEFAULT_STARS: usize = 50;

/// Default output file for the rendered flag.
pub const DEFAULT_OUTPUT: &str = "bandera.svg";

#[derive(Parser)]
#[command(name = "canton")]
#[command(version, about = "Lay out N stars in a canton and draw the flag as SVG")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Used when no subcommand is given
    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select a layout and write the flag (the default command)
    Render(RenderArgs),

    /// Print the chosen star layout without drawing anything
    Pattern(PatternArgs),

    /// Summarize the shapes and colors in an existing SVG
    Inspect(InspectArgs),
}

#[derive(Args, Clone)]
pub struct RenderArgs {
    /// Number of stars
    #[arg(default_value_t = DEFAULT_STARS)]
    pub stars: usize,

    /// Output file (- for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// YAML file overriding proportions, palette, or selector settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also rasterize the flag to this PNG file
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// PNG pixels per drawing unit
    #[arg(long, default_value_t = 0.5)]
    pub png_scale: f32,
}

#[derive(Args)]
pub struct PatternArgs {
    /// Number of stars
    #[arg(default_value_t = DEFAULT_STARS)]
    pub stars: usize,

    /// YAML file overriding selector settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// SVG file to inspect (- for stdin)
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
