//! A single face: an NxN grid of facelets.
//!
//! Cells are stored row-major with the origin at the top-left of the face
//! seen in its canonical orientation (see `core::topology` for the net).

use serde::Serialize;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::core::{Adjacency, Color, Direction, FaceLabel, Facelet, Side};

/// An owned row or column.
///
/// Kept inline for faces up to 8 wide.
pub type Strip = SmallVec<[Facelet; 8]>;

/// One face of the cube.
///
/// ## Usage
///
/// ```
/// use rust_cube::core::{Color, FaceLabel, Side};
/// use rust_cube::face::Face;
///
/// let mut face = Face::new(FaceLabel::Front, 3, Color::Green);
/// assert!(face.is_uniform());
///
/// face.rotate_clockwise();
/// // Cell (0, 0) now holds the facelet that started bottom-left.
/// assert_eq!((face[(0, 0)].row, face[(0, 0)].col), (2, 0));
///
/// assert_eq!(face.strip(Side::Top).len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Face {
    label: FaceLabel,
    size: usize,
    cells: Vec<Facelet>,
}

impl Face {
    /// Create a face filled with `color`; each cell is tagged with its own
    /// coordinates.
    ///
    /// # Panics
    /// Panics if `size` is 0. `Cube` validates its size before building
    /// faces.
    #[must_use]
    pub fn new(label: FaceLabel, size: usize, color: Color) -> Self {
        assert!(size > 0, "Face size must be at least 1");

        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Facelet::new(color, row, col)))
            .collect();

        Self { label, size, cells }
    }

    /// Which face this is.
    #[must_use]
    pub fn label(&self) -> FaceLabel {
        self.label
    }

    /// Width and height of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Neighbors of this face.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::of(self.label)
    }

    // === Cells ===

    /// Facelet at (row, col), or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Facelet> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Overwrite the facelet at (row, col).
    ///
    /// # Panics
    /// Panics if (row, col) is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, facelet: Facelet) {
        self[(row, col)] = facelet;
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Facelet] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Facelet]> {
        self.cells.chunks_exact(self.size)
    }

    /// True when every cell has the same color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let first = self.cells[0].color;
        self.cells.iter().all(|f| f.color == first)
    }

    // === Rows and columns ===

    /// Row `row`, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Facelet] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Column `col`, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Strip {
        (0..self.size).map(|row| self[(row, col)]).collect()
    }

    /// Replace row `row`, left to right.
    ///
    /// # Panics
    /// Panics if `values` is not exactly one row long.
    pub fn set_row(&mut self, row: usize, values: &[Facelet]) {
        assert_eq!(values.len(), self.size, "Row length must match face size");
        let start = row * self.size;
        self.cells[start..start + self.size].copy_from_slice(values);
    }

    /// Replace column `col`, top to bottom.
    ///
    /// # Panics
    /// Panics if `values` is not exactly one column long.
    pub fn set_column(&mut self, col: usize, values: &[Facelet]) {
        assert_eq!(values.len(), self.size, "Column length must match face size");
        for (row, &facelet) in values.iter().enumerate() {
            self[(row, col)] = facelet;
        }
    }

    // === Side strips ===

    /// Copy of the strip along `side`, walking counter-clockwise (see
    /// `Side::cell`).
    #[must_use]
    pub fn strip(&self, side: Side) -> Strip {
        (0..self.size)
            .map(|k| self[side.cell(self.size, k)])
            .collect()
    }

    /// Write `values` along `side` in the same order `strip` reads it.
    ///
    /// # Panics
    /// Panics if `values` is not exactly one strip long.
    pub fn set_strip(&mut self, side: Side, values: &[Facelet]) {
        assert_eq!(values.len(), self.size, "Strip length must match face size");
        for (k, &facelet) in values.iter().enumerate() {
            let cell = side.cell(self.size, k);
            self[cell] = facelet;
        }
    }

    // === Rotation ===

    /// Rotate the grid 90° clockwise: `new[i][j] = old[N-1-j][i]`.
    ///
    /// The result is built in a fresh buffer and then committed to this face.
    pub fn rotate_clockwise(&mut self) {
        let n = self.size;
        let rotated: Vec<Facelet> = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| self.cells[(n - 1 - j) * n + i])
            .collect();
        self.cells = rotated;
    }

    /// Rotate the grid one quarter turn in `direction`.
    pub fn rotate(&mut self, direction: Direction) {
        for _ in 0..direction.quarter_turns() {
            self.rotate_clockwise();
        }
    }
}

impl Index<(usize, usize)> for Face {
    type Output = Facelet;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.size && col < self.size, "Cell out of bounds");
        &self.cells[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for Face {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.size && col < self.size, "Cell out of bounds");
        &mut self.cells[row * self.size + col]
    }
}
