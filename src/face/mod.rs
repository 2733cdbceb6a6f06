//! Face grids.
//!
//! A `Face` owns its NxN cells and knows how to rotate them in place and how
//! to read and write the strip along any of its four sides. It knows nothing
//! about other faces; edge cycling is driven by `Cube`.

pub mod grid;

pub use grid::{Face, Strip};
