//! Cube configuration types.
//!
//! A cube is built from:
//! - `ColorScheme`: which color fills each face
//! - `CubeConfig`: size plus scheme
//!
//! Nothing is validated until `CubeConfig::validate`, so builders can be
//! chained freely.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{CubeError, CubeResult};
use super::label::{FaceLabel, FaceMap};

/// Fill color for each face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme(pub FaceMap<Color>);

impl ColorScheme {
    /// Front green, Back blue, Right red, Left orange, Up white, Down yellow.
    #[must_use]
    pub fn standard() -> Self {
        Self(FaceMap::new(|label| match label {
            FaceLabel::Front => Color::Green,
            FaceLabel::Back => Color::Blue,
            FaceLabel::Right => Color::Red,
            FaceLabel::Left => Color::Orange,
            FaceLabel::Up => Color::White,
            FaceLabel::Down => Color::Yellow,
        }))
    }

    /// Fill color of `label`.
    #[must_use]
    pub fn color(&self, label: FaceLabel) -> Color {
        self.0[label]
    }

    /// Replace the fill color of one face.
    #[must_use]
    pub fn with_color(mut self, label: FaceLabel, color: Color) -> Self {
        self.0[label] = color;
        self
    }

    /// Check that no two faces share a color.
    pub fn validate(&self) -> CubeResult<()> {
        for (i, (first, &color)) in self.0.iter().enumerate() {
            if let Some((second, _)) = self.0.iter().skip(i + 1).find(|&(_, &c)| c == color) {
                return Err(CubeError::DuplicateColor {
                    color,
                    first,
                    second,
                });
            }
        }
        Ok(())
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete cube configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Facelets per face edge (N). Must be at least 1.
    pub size: usize,

    /// Fill color per face.
    pub scheme: ColorScheme,
}

impl CubeConfig {
    /// Create a configuration with the standard color scheme.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            scheme: ColorScheme::standard(),
        }
    }

    /// Replace the fill color of one face.
    #[must_use]
    pub fn with_color(mut self, label: FaceLabel, color: Color) -> Self {
        self.scheme = self.scheme.with_color(label, color);
        self
    }

    /// Replace the whole color scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Check size and scheme.
    pub fn validate(&self) -> CubeResult<()> {
        if self.size < 1 {
            return Err(CubeError::InvalidSize(self.size));
        }
        self.scheme.validate()
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self::new(3)
    }
}
