//! Flag rendering - turns a star layout into drawing primitives.
//!
//! Draw order is back to front: 13 stripes, the canton, then the stars.

use crate::geometry::{Point, Polygon, Rect};
use crate::layout::{LayoutMode, StarLayout};
use crate::proportions::{FlagProportions, FlagSpec, STRIPE_COUNT};
use crate::star::star_polygon;

/// A filled shape in the output image.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect { rect: Rect, fill: String },
    Polygon { polygon: Polygon, fill: String },
}

/// A complete flag ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    /// Shapes in paint order
    pub primitives: Vec<Primitive>,
}

impl Drawing {
    /// Number of rectangles (stripes and canton).
    pub fn rect_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
            .count()
    }

    /// Number of star polygons.
    pub fn polygon_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polygon { .. }))
            .count()
    }
}

/// Horizontal spacing and first-star x for row `index` holding `count` stars.
///
/// ## Rust Lesson #12: Tuples and Exhaustive Matches
///
/// Returning `(f64, f64)` hands back two values without declaring a struct;
/// the caller destructures with `let (sx, start_x) = ...`. The `match` has
/// no `_` arm at the top level, so adding a `LayoutMode` variant won't
/// compile until this function knows how to place it.
fn row_placement(mode: LayoutMode, max_row: usize, index: usize, count: usize, canton_width: f64) -> (f64, f64) {
    let odd = index % 2 != 0;
    match mode {
        LayoutMode::GridStaggered => {
            let sx = canton_width / (count as f64 + 0.5);
            let shift = if odd { sx / 2.0 } else { 0.0 };
            (sx, sx / 2.0 + shift)
        }
        LayoutMode::AltStaggeredHighFirst | LayoutMode::AltStaggeredLowFirst => {
            let sx = canton_width / max_row as f64;
            // The long rows sit flush; the short rows are pushed in half a unit.
            let shifted = match mode {
                LayoutMode::AltStaggeredHighFirst => odd,
                _ => !odd,
            };
            let row_shift = if shifted { 0.5 } else { 0.0 };
            (sx, sx / 2.0 + row_shift * sx)
        }
        LayoutMode::Grid => {
            let sx = canton_width / max_row as f64;
            let inset = (max_row - count) as f64 / 2.0;
            (sx, sx / 2.0 + inset * sx)
        }
    }
}

/// Star centers for `layout`, row by row, left to right.
///
/// Rows are spread evenly down the canton with a one-row gap at the top
/// and bottom, so no row touches the canton edge.
pub fn star_centers(layout: &StarLayout, proportions: &FlagProportions) -> Vec<Point> {
    let canton_width = proportions.canton_width_px();
    let canton_height = proportions.canton_height_px();
    let max_row = layout.max_row();

    let sy = canton_height / (layout.row_count() as f64 + 1.0);

    let mut centers = Vec::with_capacity(layout.star_count());
    for (i, &count) in layout.rows.iter().enumerate() {
        let cy = (i as f64 + 1.0) * sy;
        let (sx, start_x) = row_placement(layout.mode, max_row, i, count, canton_width);
        centers.extend((0..count).map(|j| Point::new(start_x + j as f64 * sx, cy)));
    }
    centers
}

/// Render a flag for `layout`.
pub fn render(layout: &StarLayout, spec: &FlagSpec) -> Drawing {
    let proportions = &spec.proportions;
    let palette = &spec.palette;
    let width = proportions.width();
    let height = proportions.height();
    let stripe_height = proportions.stripe_height_px();

    let mut primitives = Vec::with_capacity(STRIPE_COUNT + 1 + layout.star_count());

    for i in 0..STRIPE_COUNT {
        primitives.push(Primitive::Rect {
            rect: Rect::new(0.0, i as f64 * stripe_height, width, stripe_height),
            fill: palette.stripe(i).to_string(),
        });
    }

    primitives.push(Primitive::Rect {
        rect: Rect::new(0.0, 0.0, proportions.canton_width_px(), proportions.canton_height_px()),
        fill: palette.blue.clone(),
    });

    let radius = proportions.star_radius_px();
    primitives.extend(star_centers(layout, proportions).into_iter().map(|center| Primitive::Polygon {
        polygon: star_polygon(center, radius),
        fill: palette.star.clone(),
    }));

    Drawing { width, height, primitives }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_pattern;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn primitive_counts() {
        for n in [1, 13, 48, 50, 51] {
            let layout = select_pattern(n).unwrap();
            let drawing = render(&layout, &FlagSpec::default());
            assert_eq!(drawing.rect_count(), STRIPE_COUNT + 1);
            assert_eq!(drawing.polygon_count(), n);
            assert_eq!(drawing.primitives.len(), STRIPE_COUNT + 1 + n);
        }
    }

    #[test]
    fn paint_order_is_stripes_canton_stars() {
        let layout = select_pattern(50).unwrap();
        let spec = FlagSpec::default();
        let drawing = render(&layout, &spec);

        for (i, p) in drawing.primitives[..STRIPE_COUNT].iter().enumerate() {
            match p {
                Primitive::Rect { fill, .. } => assert_eq!(fill, spec.palette.stripe(i)),
                other => panic!("expected stripe rect, got {:?}", other),
            }
        }
        match &drawing.primitives[STRIPE_COUNT] {
            Primitive::Rect { rect, fill } => {
                assert_eq!(fill, "#3C3B6E");
                assert_eq!((rect.x, rect.y), (0.0, 0.0));
                assert!(close(rect.width, 760.0));
            }
            other => panic!("expected canton rect, got {:?}", other),
        }
        assert!(drawing.primitives[STRIPE_COUNT + 1..]
            .iter()
            .all(|p| matches!(p, Primitive::Polygon { fill, .. } if fill == "#FFFFFF")));
    }

    #[test]
    fn grid_rows_are_centered() {
        let layout = StarLayout::new(vec![8; 6], LayoutMode::Grid, 0.0);
        let centers = star_centers(&layout, &FlagProportions::default());
        assert_eq!(centers.len(), 48);
        // sx = 760 / 8
        assert!(close(centers[0].x, 47.5));
        assert!(close(centers[1].x, 142.5));
        let sy = (7000.0 / 13.0) / 7.0;
        assert!(close(centers[0].y, sy));
        assert!(close(centers[47].y, 6.0 * sy));
    }

    #[test]
    fn short_grid_row_is_inset() {
        let layout = StarLayout::new(vec![4, 2], LayoutMode::Grid, 0.0);
        let centers = star_centers(&layout, &FlagProportions::default());
        // sx = 190; second row starts one unit in
        assert!(close(centers[4].x, 95.0 + 190.0));
    }

    #[test]
    fn alternating_high_first_shifts_odd_rows() {
        let layout = select_pattern(50).unwrap();
        let centers = star_centers(&layout, &FlagProportions::default());
        let sx = 760.0 / 6.0;
        assert!(close(centers[0].x, sx / 2.0));
        // first star of row 1 (index 6)
        assert!(close(centers[6].x, sx));
        // row 2 back to unshifted
        assert!(close(centers[11].x, sx / 2.0));
    }

    #[test]
    fn alternating_low_first_shifts_even_rows() {
        let layout = StarLayout::new(vec![5, 6, 5], LayoutMode::AltStaggeredLowFirst, 0.0);
        let centers = star_centers(&layout, &FlagProportions::default());
        let sx = 760.0 / 6.0;
        assert!(close(centers[0].x, sx));
        assert!(close(centers[5].x, sx / 2.0));
        assert!(close(centers[11].x, sx));
    }

    #[test]
    fn staggered_grid_uses_half_unit_wider_spacing() {
        let layout = StarLayout::new(vec![3; 5], LayoutMode::GridStaggered, 0.0);
        let centers = star_centers(&layout, &FlagProportions::default());
        let sx = 760.0 / 3.5;
        assert!(close(centers[0].x, sx / 2.0));
        assert!(close(centers[3].x, sx));
        assert!(close(centers[4].x - centers[3].x, sx));
    }

    #[test]
    fn stars_stay_inside_canton() {
        let proportions = FlagProportions::default();
        let width = proportions.canton_width_px();
        let height = proportions.canton_height_px();
        for n in 1..=120 {
            let layout = select_pattern(n).unwrap();
            for c in star_centers(&layout, &proportions) {
                assert!(c.x > 0.0 && c.x < width, "{} stars: center {:?} outside canton", n, c);
                assert!(c.y > 0.0 && c.y < height, "{} stars: center {:?} outside canton", n, c);
            }
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        let layout = select_pattern(37).unwrap();
        let spec = FlagSpec::default();
        assert_eq!(render(&layout, &spec), render(&layout, &spec));
    }
}
