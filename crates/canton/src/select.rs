//! Star pattern selection.
//!
//! Searches every (rows, columns) pair up to N and scores the row
//! arrangements that fit exactly N stars:
//!
//! 1. Uniform grid `c, c, c...` (only when `r * c == n`), plus a staggered
//!    copy of the same rows when there is more than one row.
//! 2. Alternating `c, c-1, c...`
//! 3. Alternating `c-1, c, c-1...`
//!
//! Each candidate's rough width/height ratio is compared with the canton's
//! own ratio. The closest wins; ties keep whichever was seen first, walking
//! `r` upward, then `c` upward, then the three shapes in the order above.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CantonError;
use crate::layout::{LayoutMode, StarLayout};

/// Canonical canton width/height ratio.
pub const DEFAULT_TARGET_ASPECT: f64 = 1.411;

/// Added to the score of single-row and single-column layouts.
pub const DEFAULT_DEGENERATE_PENALTY: f64 = 10.0;

/// Tunable scoring constants.
///
/// The defaults reproduce the historical 48- and 50-star layouts. They are
/// empirical, not derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Effective aspect ratio the search aims for
    pub target_aspect: f64,
    /// Score penalty for one-row or one-star-per-row layouts
    pub degenerate_penalty: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            target_aspect: DEFAULT_TARGET_ASPECT,
            degenerate_penalty: DEFAULT_DEGENERATE_PENALTY,
        }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<(), CantonError> {
        for (name, value) in [
            ("target_aspect", self.target_aspect),
            ("degenerate_penalty", self.degenerate_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CantonError::InvalidSelector { name, value });
            }
        }
        Ok(())
    }
}

/// A row arrangement considered by the search.
#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    rows: Vec<usize>,
    mode: LayoutMode,
    row_count: usize,
    columns: usize,
}

impl Candidate {
    /// Distance of the effective aspect ratio from the target, plus the
    /// degenerate-layout penalty where it applies.
    fn score(&self, config: &SelectorConfig) -> f64 {
        let c = self.columns as f64;
        let r = self.row_count as f64;
        let effective_aspect = if self.mode.is_staggered() {
            c / (r / 2.0)
        } else {
            c / r
        };

        let mut score = (effective_aspect - config.target_aspect).abs();

        let max_row = self.rows.iter().copied().max().unwrap_or(0);
        if self.row_count == 1 || max_row == 1 {
            score += config.degenerate_penalty;
        }
        score
    }
}

/// Build the valid candidates for one (r, c) pair, in tie-break order.
fn candidates_for(n: usize, r: usize, c: usize) -> Vec<Candidate> {
    let mut out = Vec::new();
    let candidate = |rows: Vec<usize>, mode: LayoutMode| Candidate {
        rows,
        mode,
        row_count: r,
        columns: c,
    };

    if r * c == n {
        out.push(candidate(vec![c; r], LayoutMode::Grid));
        if r > 1 {
            out.push(candidate(vec![c; r], LayoutMode::GridStaggered));
        }
    }

    // Even-indexed rows vs odd-indexed rows.
    let even = r.div_ceil(2);
    let odd = r / 2;

    // A single alternating row is just an equal-count row shown staggered.
    let alt_mode = |mode: LayoutMode| if r == 1 { LayoutMode::GridStaggered } else { mode };

    // c, c-1, c, ...
    let short = c - 1;
    if c * even + short * odd == n && (short >= 1 || odd == 0) {
        let rows = (0..r).map(|i| if i % 2 == 0 { c } else { short }).collect();
        out.push(candidate(rows, alt_mode(LayoutMode::AltStaggeredHighFirst)));
    }

    // c-1, c, c-1, ...
    if short * even + c * odd == n && short >= 1 {
        let rows = (0..r).map(|i| if i % 2 == 0 { short } else { c }).collect();
        out.push(candidate(rows, alt_mode(LayoutMode::AltStaggeredLowFirst)));
    }

    out
}

/// Enumerate every candidate for `n` stars in tie-break order.
fn candidates(n: usize) -> impl Iterator<Item = Candidate> {
    (1..=n).flat_map(move |r| (1..=n).flat_map(move |c| candidates_for(n, r, c)))
}

/// Choose the star layout for `n` stars using the default scoring constants.
///
/// # Example
/// ```
/// use canton::{select_pattern, LayoutMode};
///
/// let layout = select_pattern(48).unwrap();
/// assert_eq!(layout.rows, vec![8; 6]);
/// assert_eq!(layout.mode, LayoutMode::Grid);
/// ```
pub fn select_pattern(n: usize) -> Result<StarLayout, CantonError> {
    select_pattern_with(n, &SelectorConfig::default())
}

/// Choose the star layout for `n` stars.
///
/// Fails for `n == 0` or an invalid `config`; every positive count has at
/// least the single-row grid as a candidate.
pub fn select_pattern_with(n: usize, config: &SelectorConfig) -> Result<StarLayout, CantonError> {
    if n == 0 {
        return Err(CantonError::InvalidStarCount(n));
    }
    config.validate()?;

    let best = candidates(n).fold(None, |best, candidate| keep_best(best, candidate, config));

    let layout = best.unwrap_or_else(|| StarLayout::new(vec![n], LayoutMode::Grid, f64::INFINITY));
    debug!(stars = n, rows = ?layout.rows, mode = %layout.mode, score = layout.score, "selected layout");
    Ok(layout)
}

/// One step of the search: replace `best` only if `candidate` scores
/// strictly lower, so equal scores keep the earlier layout.
///
/// ## Rust Lesson #11: Folding Instead of Mutating
///
/// The search never keeps a `mut best` outside the loop. `fold` threads
/// the accumulator through each step by value: this function takes the
/// current best, and whatever it returns becomes the next one.
fn keep_best(best: Option<StarLayout>, candidate: Candidate, config: &SelectorConfig) -> Option<StarLayout> {
    let score = candidate.score(config);
    match best {
        Some(current) if score >= current.score => Some(current),
        _ => {
            debug!(
                rows = candidate.row_count,
                columns = candidate.columns,
                mode = %candidate.mode,
                score,
                "new best candidate"
            );
            Some(StarLayout::new(candidate.rows, candidate.mode, score))
        }
    }
}
