//! SVG output - serialize a `Drawing` as an SVG document.
//!
//! Rectangles are written with 2 decimal places, star vertices with 4.
//! Output is a pure function of the drawing, so the same flag always
//! produces the same bytes.

use crate::render::{Drawing, Primitive};

/// Serialize a drawing to an SVG document string.
pub fn to_svg(drawing: &Drawing) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
"#,
        w = drawing.width,
        h = drawing.height,
    ));

    for primitive in &drawing.primitives {
        match primitive {
            Primitive::Rect { rect, fill } => {
                svg.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" />\n",
                    rect.x, rect.y, rect.width, rect.height, fill
                ));
            }
            Primitive::Polygon { polygon, fill } => {
                // Build points string: "x1,y1 x2,y2 x3,y3 ..."
                let points: String = polygon
                    .points
                    .iter()
                    .map(|p| format!("{:.4},{:.4}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                svg.push_str(&format!("<polygon points=\"{}\" fill=\"{}\" />\n", points, fill));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}
