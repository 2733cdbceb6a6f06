//! Facelet values.
//!
//! A `Facelet` is what a single grid cell holds: a `Color` plus the
//! coordinates it started at on its home face. The coordinates never change
//! once a facelet is placed, so after any number of turns every facelet of a
//! cube built with distinct face colors is still individually identifiable.
//!
//! ## Usage
//!
//! ```
//! use rust_cube::core::{Color, Facelet};
//!
//! let facelet = Facelet::new(Color::Green, 0, 2);
//! assert_eq!(facelet.color, Color::Green);
//! assert_eq!(facelet.tag(), "13 green");
//! ```

use serde::{Deserialize, Serialize};

/// Sticker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    /// All colors.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    /// Lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Orange => "orange",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One cell of a face's grid.
///
/// `row` and `col` are the 0-based coordinates the facelet was created at on
/// its home face. They are identity, not position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facelet {
    /// Sticker color.
    pub color: Color,

    /// Home row.
    pub row: usize,

    /// Home column.
    pub col: usize,
}

impl Facelet {
    /// Create a facelet.
    #[must_use]
    pub const fn new(color: Color, row: usize, col: usize) -> Self {
        Self { color, row, col }
    }

    /// Debugging tag: 1-based home row and column followed by the color,
    /// e.g. `"21 red"`.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("{}{} {}", self.row + 1, self.col + 1, self.color)
    }
}

impl std::fmt::Display for Facelet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
