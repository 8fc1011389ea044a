//! # canton
//!
//! Star layout selection and flag geometry.
//!
//! Given a star count, [`select_pattern`] picks a row arrangement whose
//! shape best fits the canton, [`render`] places stripes, canton, and stars
//! in drawing coordinates, and [`to_svg`] writes the result out.
//!
//! ```
//! use canton::{render, select_pattern, to_svg, FlagSpec};
//!
//! let layout = select_pattern(50).unwrap();
//! let svg = to_svg(&render(&layout, &FlagSpec::default()));
//! assert_eq!(svg.matches("<polygon").count(), 50);
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod proportions;
pub mod render;
pub mod select;
pub mod star;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use error::CantonError;
pub use geometry::{Point, Polygon, Rect};
pub use layout::{LayoutMode, StarLayout};
pub use proportions::{FlagProportions, FlagSpec, Palette, STRIPE_COUNT};
pub use render::{render, star_centers, Drawing, Primitive};
pub use select::{select_pattern, select_pattern_with, SelectorConfig};
pub use star::{star_polygon, INNER_RADIUS_RATIO};
pub use svg::to_svg;
