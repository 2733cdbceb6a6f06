//! Core types: colors, face labels, topology, moves, configuration, errors.
//!
//! Everything here is plain data plus the static geometry of the cube.
//! Grids and the rotation engine live in `face` and `cube`.

pub mod color;
pub mod label;
pub mod topology;
pub mod action;
pub mod config;
pub mod error;

pub use color::{Color, Facelet};
pub use label::{FaceLabel, FaceMap};
pub use topology::{ring, Adjacency, Side, StripRef};
pub use action::{Direction, Turn};
pub use config::{ColorScheme, CubeConfig};
pub use error::{CubeError, CubeResult};
