//! Render command implementation.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use resvg::usvg;
use tiny_skia::Pixmap;
use tracing::{debug, info};

use canton::{render, select_pattern_with, to_svg, StarLayout};

use super::args::RenderArgs;
use super::common::{is_stdio, load_spec, write_output};

/// One-line description of a layout for humans.
pub fn describe_layout(stars: usize, layout: &StarLayout) -> String {
    format!(
        "Using pattern for {} stars: {:?} (staggered: {}, {})",
        stars,
        layout.rows,
        layout.is_staggered(),
        layout.mode
    )
}

/// Execute the render command.
pub fn cmd_render(args: &RenderArgs) -> Result<()> {
    ensure!(
        args.png_scale.is_finite() && args.png_scale > 0.0,
        "--png-scale must be positive, got {}",
        args.png_scale
    );

    let spec = load_spec(args.config.as_deref())?;
    let layout = select_pattern_with(args.stars, &spec.selector)?;

    // Keep stdout clean when the SVG itself goes there.
    let summary = describe_layout(args.stars, &layout);
    if is_stdio(&args.output) {
        eprintln!("{}", summary);
    } else {
        println!("{}", summary);
    }

    let drawing = render(&layout, &spec);
    debug!(
        width = drawing.width,
        height = drawing.height,
        rects = drawing.rect_count(),
        stars = drawing.polygon_count(),
        "rendered flag"
    );

    let svg = to_svg(&drawing);
    write_output(&args.output, &svg)?;
    if !is_stdio(&args.output) {
        info!(path = %args.output.display(), bytes = svg.len(), "wrote flag svg");
    }

    if let Some(png_path) = &args.png {
        let (w, h) = write_png(&svg, png_path, args.png_scale, drawing.width, drawing.height)?;
        info!(path = %png_path.display(), width = w, height = h, "wrote flag png");
    }

    Ok(())
}

/// Rasterize SVG content to a PNG file with resvg, on a white background.
///
/// Returns the pixel size of the image written.
pub fn write_png(svg_content: &str, png_path: &Path, scale: f32, width: f64, height: f64) -> Result<(u32, u32)> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).context("failed to parse generated SVG")?;

    let pixmap_width = ((width as f32 * scale).round() as u32).max(1);
    let pixmap_height = ((height as f32 * scale).round() as u32).max(1);

    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height)
        .with_context(|| format!("could not create {}x{} pixmap", pixmap_width, pixmap_height))?;

    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .with_context(|| format!("failed to write {}", png_path.display()))?;

    Ok((pixmap_width, pixmap_height))
}
