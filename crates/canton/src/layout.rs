//! Star layouts: how many stars go in each row, and how rows are offset.

use serde::Serialize;

/// How the rows of a layout line up horizontally.
///
/// ## Rust Lesson #9: Enums Carry Meaning
///
/// Instead of a `staggered: bool` plus a check on the row contents at
/// render time, each way of placing rows is its own variant. A `match`
/// on this enum must handle all four, so the renderer can't forget one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Equal rows, aligned columns, short rows centered.
    Grid,
    /// Equal rows, odd rows shifted right by half a spacing unit.
    GridStaggered,
    /// Rows alternate long/short, starting with the long row.
    AltStaggeredHighFirst,
    /// Rows alternate short/long, starting with the short row.
    AltStaggeredLowFirst,
}

impl LayoutMode {
    /// Whether alternate rows are horizontally offset.
    pub fn is_staggered(&self) -> bool {
        !matches!(self, LayoutMode::Grid)
    }

    /// Mode name as used in CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Grid => "grid",
            LayoutMode::GridStaggered => "grid-staggered",
            LayoutMode::AltStaggeredHighFirst => "alt-staggered-high-first",
            LayoutMode::AltStaggeredLowFirst => "alt-staggered-low-first",
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A chosen star arrangement.
///
/// Invariant: `rows` is non-empty, every entry is at least 1, and the
/// entries sum to the star count the layout was selected for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarLayout {
    /// Star count per row, top to bottom
    pub rows: Vec<usize>,
    /// Row alignment
    pub mode: LayoutMode,
    /// Selector score (lower is better)
    pub score: f64,
}

impl StarLayout {
    pub fn new(rows: Vec<usize>, mode: LayoutMode, score: f64) -> Self {
        Self { rows, mode, score }
    }

    /// Total number of stars.
    pub fn star_count(&self) -> usize {
        self.rows.iter().sum()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Longest row (0 for an empty layout).
    pub fn max_row(&self) -> usize {
        self.rows.iter().copied().max().unwrap_or(0)
    }

    pub fn is_staggered(&self) -> bool {
        self.mode.is_staggered()
    }
}
