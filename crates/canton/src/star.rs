//! Five-pointed star polygons.

use std::f64::consts::PI;

use crate::geometry::{Point, Polygon};

/// Inner/outer radius ratio of a regular five-pointed star.
pub const INNER_RADIUS_RATIO: f64 = 0.38196601125;

/// Vertices per star: 5 points and 5 inner corners.
pub const STAR_VERTICES: usize = 10;

/// Build a star centered at `center`, first point straight up.
///
/// Vertex `i` sits at angle `-PI/2 + i * PI/5`; even vertices use
/// `outer_radius`, odd ones `outer_radius * INNER_RADIUS_RATIO`.
pub fn star_polygon(center: Point, outer_radius: f64) -> Polygon {
    let inner_radius = outer_radius * INNER_RADIUS_RATIO;
    let points = (0..STAR_VERTICES)
        .map(|i| {
            let angle = -PI / 2.0 + i as f64 * PI / 5.0;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect();
    Polygon::new(points)
}
