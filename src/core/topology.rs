//! Static cube topology.
//!
//! Two tables describe how the faces fit together:
//!
//! - `Adjacency::of(face)`: which face lies across each side of `face`,
//!   in the fixed order Upper, Lower, Right, Left.
//! - `ring(face)`: the four neighbor strips that border `face`, in clockwise
//!   order around it. A quarter turn cycles these strips.
//!
//! The faces are laid out on this net, each seen from outside the cube:
//!
//! ```text
//!         U
//!     L   F   R   B
//!         D
//! ```
//!
//! ## Strip selection
//!
//! The side of a neighbor that touches the turning face is the side on which
//! the neighbor's own adjacency names the turning face. Strips are read in
//! the neighbor's counter-clockwise order along that side, which is clockwise
//! around the turning face, so element `k` of one strip moves to element `k`
//! of the next.

use serde::{Deserialize, Serialize};

use super::label::FaceLabel;

/// One of the four edges of a face grid, seen in its canonical orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Row 0.
    Top,
    /// Column N-1.
    Right,
    /// Row N-1.
    Bottom,
    /// Column 0.
    Left,
}

impl Side {
    /// Sides in clockwise order starting from the top.
    pub const CLOCKWISE: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Grid coordinates of the `k`-th cell along this side of an
    /// `size`-wide face, walking counter-clockwise.
    ///
    /// Top runs right to left, Right bottom to top, Bottom left to right and
    /// Left top to bottom.
    #[must_use]
    pub const fn cell(self, size: usize, k: usize) -> (usize, usize) {
        let last = size - 1;
        match self {
            Side::Top => (0, last - k),
            Side::Right => (last - k, last),
            Side::Bottom => (last, k),
            Side::Left => (k, 0),
        }
    }
}

/// The four neighbors of a face in the order Upper, Lower, Right, Left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    /// Across the top row.
    pub upper: FaceLabel,
    /// Across the bottom row.
    pub lower: FaceLabel,
    /// Across the rightmost column.
    pub right: FaceLabel,
    /// Across the leftmost column.
    pub left: FaceLabel,
}

impl Adjacency {
    const fn new(upper: FaceLabel, lower: FaceLabel, right: FaceLabel, left: FaceLabel) -> Self {
        Self {
            upper,
            lower,
            right,
            left,
        }
    }

    /// Neighbors of `face`.
    #[must_use]
    pub const fn of(face: FaceLabel) -> Self {
        use FaceLabel::*;

        match face {
            Front => Self::new(Up, Down, Right, Left),
            Right => Self::new(Up, Down, Back, Front),
            Left => Self::new(Up, Down, Front, Back),
            Back => Self::new(Up, Down, Left, Right),
            Up => Self::new(Back, Front, Right, Left),
            Down => Self::new(Front, Back, Right, Left),
        }
    }

    /// Neighbors in table order: Upper, Lower, Right, Left.
    #[must_use]
    pub const fn as_array(&self) -> [FaceLabel; 4] {
        [self.upper, self.lower, self.right, self.left]
    }

    /// Neighbors in clockwise order: Upper, Right, Lower, Left.
    #[must_use]
    pub const fn clockwise(&self) -> [FaceLabel; 4] {
        [self.upper, self.right, self.lower, self.left]
    }

    /// Neighbor across the given side.
    #[must_use]
    pub const fn across(&self, side: Side) -> FaceLabel {
        match side {
            Side::Top => self.upper,
            Side::Right => self.right,
            Side::Bottom => self.lower,
            Side::Left => self.left,
        }
    }

    /// Side across which `other` lies, or `None` if `other` is not a
    /// neighbor.
    #[must_use]
    pub fn side_of(&self, other: FaceLabel) -> Option<Side> {
        Side::CLOCKWISE
            .into_iter()
            .find(|&side| self.across(side) == other)
    }
}

/// A full row or column of a specific face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StripRef {
    pub face: FaceLabel,
    pub side: Side,
}

impl StripRef {
    const fn new(face: FaceLabel, side: Side) -> Self {
        Self { face, side }
    }
}

/// Neighbor strips bordering `face`, clockwise: Upper, Right, Lower, Left.
///
/// A forward turn moves the contents of entry `i` into entry `i + 1`.
#[must_use]
pub const fn ring(face: FaceLabel) -> [StripRef; 4] {
    use FaceLabel::*;
    use Side::{Bottom, Left as L, Right as R, Top};

    match face {
        Front => [
            StripRef::new(Up, Bottom),
            StripRef::new(Right, L),
            StripRef::new(Down, Top),
            StripRef::new(Left, R),
        ],
        Back => [
            StripRef::new(Up, Top),
            StripRef::new(Left, L),
            StripRef::new(Down, Bottom),
            StripRef::new(Right, R),
        ],
        Right => [
            StripRef::new(Up, R),
            StripRef::new(Back, L),
            StripRef::new(Down, R),
            StripRef::new(Front, R),
        ],
        Left => [
            StripRef::new(Up, L),
            StripRef::new(Front, L),
            StripRef::new(Down, L),
            StripRef::new(Back, R),
        ],
        Up => [
            StripRef::new(Back, Top),
            StripRef::new(Right, Top),
            StripRef::new(Front, Top),
            StripRef::new(Left, Top),
        ],
        Down => [
            StripRef::new(Front, Bottom),
            StripRef::new(Right, Bottom),
            StripRef::new(Back, Bottom),
            StripRef::new(Left, Bottom),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_table() {
        use FaceLabel::*;

        assert_eq!(Adjacency::of(Front).as_array(), [Up, Down, Right, Left]);
        assert_eq!(Adjacency::of(Right).as_array(), [Up, Down, Back, Front]);
        assert_eq!(Adjacency::of(Left).as_array(), [Up, Down, Front, Back]);
        assert_eq!(Adjacency::of(Back).as_array(), [Up, Down, Left, Right]);
        assert_eq!(Adjacency::of(Up).as_array(), [Back, Front, Right, Left]);
        assert_eq!(Adjacency::of(Down).as_array(), [Front, Back, Right, Left]);
    }

    #[test]
    fn test_neighbors_exclude_self_and_opposite() {
        for face in FaceLabel::all() {
            let neighbors = Adjacency::of(face).as_array();
            assert!(!neighbors.contains(&face));
            assert!(!neighbors.contains(&face.opposite()));

            let mut sorted = neighbors;
            sorted.sort();
            assert!(sorted.windows(2).all(|w| w[0] != w[1]), "{face} has a repeated neighbor");
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for face in FaceLabel::all() {
            for neighbor in Adjacency::of(face).as_array() {
                assert!(
                    Adjacency::of(neighbor).side_of(face).is_some(),
                    "{neighbor} does not list {face} as a neighbor"
                );
            }
        }
    }

    #[test]
    fn test_ring_follows_adjacency() {
        for face in FaceLabel::all() {
            let faces: Vec<_> = ring(face).iter().map(|s| s.face).collect();
            assert_eq!(faces, Adjacency::of(face).clockwise());
        }
    }

    #[test]
    fn test_ring_sides_face_the_turning_face() {
        for face in FaceLabel::all() {
            for strip in ring(face) {
                assert_eq!(
                    Adjacency::of(strip.face).side_of(face),
                    Some(strip.side),
                    "turning {face}: wrong side of {}",
                    strip.face
                );
            }
        }
    }

    #[test]
    fn test_side_cells_walk_counter_clockwise() {
        // 3x3: the four sides chain into one counter-clockwise loop.
        assert_eq!(Side::Top.cell(3, 0), (0, 2));
        assert_eq!(Side::Top.cell(3, 2), (0, 0));
        assert_eq!(Side::Left.cell(3, 0), (0, 0));
        assert_eq!(Side::Left.cell(3, 2), (2, 0));
        assert_eq!(Side::Bottom.cell(3, 0), (2, 0));
        assert_eq!(Side::Bottom.cell(3, 2), (2, 2));
        assert_eq!(Side::Right.cell(3, 0), (2, 2));
        assert_eq!(Side::Right.cell(3, 2), (0, 2));
    }

    #[test]
    fn test_side_cells_size_one() {
        for side in Side::CLOCKWISE {
            assert_eq!(side.cell(1, 0), (0, 0));
        }
    }
}
