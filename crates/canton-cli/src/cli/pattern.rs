//! Pattern command - print the chosen star layout.

use anyhow::Result;
use serde::Serialize;

use canton::{select_pattern_with, StarLayout};

use super::args::PatternArgs;
use super::common::load_spec;
use super::render::describe_layout;

/// Layout in JSON output format.
#[derive(Serialize)]
struct JsonLayout<'a> {
    stars: usize,
    rows: &'a [usize],
    staggered: bool,
    mode: &'static str,
    score: f64,
}

fn layout_json(stars: usize, layout: &StarLayout) -> Result<String> {
    let out = JsonLayout {
        stars,
        rows: &layout.rows,
        staggered: layout.is_staggered(),
        mode: layout.mode.name(),
        score: layout.score,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Execute the pattern command.
pub fn cmd_pattern(args: &PatternArgs) -> Result<()> {
    let spec = load_spec(args.config.as_deref())?;
    let layout = select_pattern_with(args.stars, &spec.selector)?;

    if args.json {
        println!("{}", layout_json(args.stars, &layout)?);
    } else {
        println!("{}", describe_layout(args.stars, &layout));
        for (i, count) in layout.rows.iter().enumerate() {
            println!("  row {:>2}: {}", i + 1, count);
        }
        println!("  score:  {:.4}", layout.score);
    }
    Ok(())
}
