//! Error type for cube construction and move input.
//!
//! Every variant is an input-validation failure. Validation always happens
//! before a cube is touched, so an `Err` means nothing was mutated.

use thiserror::Error;

use super::color::Color;
use super::label::FaceLabel;

/// Root error type for all cube failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Cube size below 1.
    #[error("invalid cube size {0}: size must be at least 1")]
    InvalidSize(usize),

    /// Face label outside f, b, l, r, u, d.
    #[error("invalid face label {0:?}: expected one of f, b, l, r, u, d")]
    InvalidFaceLabel(String),

    /// Direction outside forward/reverse.
    #[error("invalid direction {0:?}: expected f (forward) or r (reverse)")]
    InvalidDirection(String),

    /// Turn token that is not a face letter optionally followed by `'`.
    #[error("invalid turn {0:?}: expected a face letter optionally followed by '")]
    InvalidTurn(String),

    /// Two faces of a color scheme share a color.
    #[error("color {color} assigned to both {first} and {second}")]
    DuplicateColor {
        color: Color,
        first: FaceLabel,
        second: FaceLabel,
    },
}

pub type CubeResult<T> = Result<T, CubeError>;
