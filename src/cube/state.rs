//! Cube state and the quarter-turn engine.
//!
//! ## Cube
//!
//! Six faces, one per label, each owned separately. The only mutation is a
//! quarter turn:
//! 1. the turning face's own grid rotates 90°;
//! 2. the four neighbor strips bordering it (see `core::topology::ring`)
//!    cycle Upper → Right → Lower → Left, once per clockwise quarter.
//!
//! All four strips are copied out before any of them is written back, so
//! no write can clobber a value still waiting to be moved.

use log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::{
    ring, Color, CubeConfig, CubeResult, Direction, FaceLabel, FaceMap, Turn,
};
use crate::face::{Face, Strip};

/// An NxN cube.
///
/// ## Example
///
/// ```
/// use rust_cube::core::{Direction, FaceLabel};
/// use rust_cube::cube::Cube;
///
/// let mut cube = Cube::new(3).unwrap();
/// cube.rotate(FaceLabel::Front, Direction::Forward);
/// assert!(!cube.is_solved());
///
/// cube.rotate(FaceLabel::Front, Direction::Reverse);
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cube {
    size: usize,
    faces: FaceMap<Face>,
}

impl Cube {
    /// Create a solved cube with the standard color scheme.
    ///
    /// Fails with `InvalidSize` when `size` is 0.
    pub fn new(size: usize) -> CubeResult<Self> {
        Self::with_config(&CubeConfig::new(size))
    }

    /// Create a solved cube from a configuration.
    pub fn with_config(config: &CubeConfig) -> CubeResult<Self> {
        config.validate()?;

        let faces = FaceMap::new(|label| Face::new(label, config.size, config.scheme.color(label)));
        debug!("built {0}x{0}x{0} cube", config.size);

        Ok(Self {
            size: config.size,
            faces,
        })
    }

    /// Facelets per face edge.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only view of one face.
    #[must_use]
    pub fn face(&self, label: FaceLabel) -> &Face {
        &self.faces[label]
    }

    /// All faces in label order.
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.values()
    }

    // === Turning ===

    /// Turn `face` one quarter in `direction`.
    pub fn rotate(&mut self, face: FaceLabel, direction: Direction) {
        debug!("rotating {face} {direction}");

        self.faces[face].rotate(direction);
        for _ in 0..direction.quarter_turns() {
            self.cycle_edges(face);
        }
    }

    /// Apply a single turn.
    pub fn apply(&mut self, turn: Turn) {
        self.rotate(turn.face, turn.direction);
    }

    /// Parse a face label and a direction, then turn.
    ///
    /// Both inputs are parsed before the cube is touched, so on error the
    /// cube is unchanged.
    ///
    /// ```
    /// use rust_cube::core::CubeError;
    /// use rust_cube::cube::Cube;
    ///
    /// let mut cube = Cube::new(2).unwrap();
    /// let before = cube.clone();
    ///
    /// assert!(matches!(cube.rotate_named("x", "f"), Err(CubeError::InvalidFaceLabel(_))));
    /// assert_eq!(cube, before);
    ///
    /// let turn = cube.rotate_named("u", "r").unwrap();
    /// assert_eq!(turn.to_string(), "U'");
    /// ```
    pub fn rotate_named(&mut self, face: &str, direction: &str) -> CubeResult<Turn> {
        let turn = Turn::new(face.parse()?, direction.parse()?);
        self.apply(turn);
        Ok(turn)
    }

    /// One clockwise step of the neighbor strips around `face`.
    fn cycle_edges(&mut self, face: FaceLabel) {
        let ring = ring(face);
        let strips: [Strip; 4] = ring.map(|s| self.faces[s.face].strip(s.side));

        for (i, strip) in strips.into_iter().enumerate() {
            let (from, to) = (ring[i], ring[(i + 1) % 4]);
            trace!(
                "{} {:?} -> {} {:?}",
                from.face,
                from.side,
                to.face,
                to.side
            );
            self.faces[to.face].set_strip(to.side, &strip);
        }
    }

    // === Queries ===

    /// True when every face is a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.values().all(Face::is_uniform)
    }

    /// Number of cells of each color across the whole cube.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for facelet in self.faces.values().flat_map(Face::cells) {
            *counts.entry(facelet.color).or_insert(0) += 1;
        }
        counts
    }
}
