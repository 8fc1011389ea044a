//! Error types for canton.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CantonError {
    #[error("star count must be at least 1, got {0}")]
    InvalidStarCount(usize),

    #[error("proportion `{name}` must be a positive finite number, got {value}")]
    InvalidProportion { name: &'static str, value: f64 },

    #[error("palette color `{name}` is not a valid SVG color: {value:?}")]
    InvalidColor { name: &'static str, value: String },

    #[error("selector setting `{name}` must be a non-negative finite number, got {value}")]
    InvalidSelector { name: &'static str, value: f64 },
}
