//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `render` - Select a star layout and write the flag as SVG (and PNG)
//! - `pattern` - Print the chosen star layout
//! - `inspect` - Summarize the shapes and colors in an SVG

pub mod args;
pub mod common;
pub mod inspect;
pub mod pattern;
pub mod render;

pub use args::{Cli, Commands};
pub use inspect::cmd_inspect;
pub use pattern::cmd_pattern;
pub use render::cmd_render;
