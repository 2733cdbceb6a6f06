//! Move representation: face + direction.
//!
//! A `Turn` is one quarter turn of one face. Turns display in the usual
//! face-letter notation (`F` clockwise, `F'` counter-clockwise) and parse a
//! single such token; sequences of moves are not supported.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::CubeError;
use super::label::FaceLabel;

/// Turn direction, as seen looking at the turning face from outside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Clockwise.
    #[default]
    Forward,
    /// Counter-clockwise.
    Reverse,
}

impl Direction {
    /// Number of clockwise quarter turns equivalent to this direction.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => 3,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Reverse => f.write_str("reverse"),
        }
    }
}

impl FromStr for Direction {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "forward" | "cw" | "clockwise" => Ok(Direction::Forward),
            "r" | "reverse" | "ccw" | "counterclockwise" => Ok(Direction::Reverse),
            _ => Err(CubeError::InvalidDirection(s.to_string())),
        }
    }
}

/// A single quarter turn.
///
/// ## Example
///
/// ```
/// use rust_cube::core::{Direction, FaceLabel, Turn};
///
/// let turn: Turn = "U'".parse().unwrap();
/// assert_eq!(turn, Turn::new(FaceLabel::Up, Direction::Reverse));
/// assert_eq!(turn.inverse().to_string(), "U");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Face being turned.
    pub face: FaceLabel,

    /// Turn direction.
    pub direction: Direction,
}

impl Turn {
    /// Create a turn.
    #[must_use]
    pub const fn new(face: FaceLabel, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Clockwise turn of `face`.
    #[must_use]
    pub const fn forward(face: FaceLabel) -> Self {
        Self::new(face, Direction::Forward)
    }

    /// Counter-clockwise turn of `face`.
    #[must_use]
    pub const fn reverse(face: FaceLabel) -> Self {
        Self::new(face, Direction::Reverse)
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.inverse())
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = self.face.code().to_ascii_uppercase();
        match self.direction {
            Direction::Forward => write!(f, "{letter}"),
            Direction::Reverse => write!(f, "{letter}'"),
        }
    }
}

impl FromStr for Turn {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (face, direction) = match token.strip_suffix('\'') {
            Some(face) => (face, Direction::Reverse),
            None => (token, Direction::Forward),
        };

        // Only the single-letter codes are notation; "front'" is not.
        if face.chars().count() != 1 {
            return Err(CubeError::InvalidTurn(s.to_string()));
        }
        let face = face
            .parse::<FaceLabel>()
            .map_err(|_| CubeError::InvalidTurn(s.to_string()))?;

        Ok(Self::new(face, direction))
    }
}
