//! Face identification and per-face data storage.
//!
//! ## FaceLabel
//!
//! Type-safe identifier for the six faces of the cube.
//!
//! ## FaceMap
//!
//! Fixed six-slot storage indexed by `FaceLabel`. Because every label owns
//! exactly one slot, a `FaceMap<Face>` can never miss a face or hold two
//! copies of one.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::CubeError;

/// One of the six faces of the cube.
///
/// The discriminant doubles as the slot index inside a `FaceMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaceLabel {
    Front = 0,
    Back = 1,
    Left = 2,
    Right = 3,
    Up = 4,
    Down = 5,
}

impl FaceLabel {
    /// All six labels in slot order.
    pub const ALL: [FaceLabel; 6] = [
        FaceLabel::Front,
        FaceLabel::Back,
        FaceLabel::Left,
        FaceLabel::Right,
        FaceLabel::Up,
        FaceLabel::Down,
    ];

    /// Slot index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Iterate over all six labels.
    ///
    /// ```
    /// use rust_cube::core::FaceLabel;
    ///
    /// let labels: Vec<_> = FaceLabel::all().collect();
    /// assert_eq!(labels.len(), 6);
    /// assert_eq!(labels[0], FaceLabel::Front);
    /// ```
    pub fn all() -> impl Iterator<Item = FaceLabel> {
        Self::ALL.into_iter()
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            FaceLabel::Front => FaceLabel::Back,
            FaceLabel::Back => FaceLabel::Front,
            FaceLabel::Left => FaceLabel::Right,
            FaceLabel::Right => FaceLabel::Left,
            FaceLabel::Up => FaceLabel::Down,
            FaceLabel::Down => FaceLabel::Up,
        }
    }

    /// Single-letter code, as accepted on the command line.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            FaceLabel::Front => 'f',
            FaceLabel::Back => 'b',
            FaceLabel::Left => 'l',
            FaceLabel::Right => 'r',
            FaceLabel::Up => 'u',
            FaceLabel::Down => 'd',
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FaceLabel::Front => "Front",
            FaceLabel::Back => "Back",
            FaceLabel::Left => "Left",
            FaceLabel::Right => "Right",
            FaceLabel::Up => "Up",
            FaceLabel::Down => "Down",
        }
    }
}

impl std::fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FaceLabel {
    type Err = CubeError;

    /// Accepts the one-letter codes or the full names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "front" => Ok(FaceLabel::Front),
            "b" | "back" => Ok(FaceLabel::Back),
            "l" | "left" => Ok(FaceLabel::Left),
            "r" | "right" => Ok(FaceLabel::Right),
            "u" | "up" => Ok(FaceLabel::Up),
            "d" | "down" => Ok(FaceLabel::Down),
            _ => Err(CubeError::InvalidFaceLabel(s.to_string())),
        }
    }
}

/// Per-face data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_cube::core::{FaceLabel, FaceMap};
///
/// let mut turns: FaceMap<u32> = FaceMap::with_value(0);
/// turns[FaceLabel::Up] += 1;
/// assert_eq!(turns[FaceLabel::Up], 1);
/// assert_eq!(turns[FaceLabel::Down], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a new FaceMap with values from a factory function.
    ///
    /// The factory is called once per label, in slot order.
    pub fn new(factory: impl FnMut(FaceLabel) -> T) -> Self {
        Self {
            data: FaceLabel::ALL.map(factory),
        }
    }

    /// Create a new FaceMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a face's data.
    #[must_use]
    pub fn get(&self, label: FaceLabel) -> &T {
        &self.data[label.index()]
    }

    /// Get a mutable reference to a face's data.
    pub fn get_mut(&mut self, label: FaceLabel) -> &mut T {
        &mut self.data[label.index()]
    }

    /// Iterate over (FaceLabel, &T) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceLabel, &T)> {
        FaceLabel::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (FaceLabel, &mut T) pairs in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FaceLabel, &mut T)> {
        FaceLabel::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in slot order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<FaceLabel> for FaceMap<T> {
    type Output = T;

    fn index(&self, label: FaceLabel) -> &Self::Output {
        self.get(label)
    }
}

impl<T> IndexMut<FaceLabel> for FaceMap<T> {
    fn index_mut(&mut self, label: FaceLabel) -> &mut Self::Output {
        self.get_mut(label)
    }
}
