//! # rust-cube
//!
//! An NxN face-turning cube engine.
//!
//! ## Design Principles
//!
//! 1. **Any Size**: Every operation works for N ≥ 1. Nothing assumes 3x3.
//!
//! 2. **Geometry in Tables**: Which faces touch, and along which sides, is
//!    static data in `core::topology`. The turn driver only walks the tables.
//!
//! 3. **Validate, Then Act**: Parsing and configuration errors are reported
//!    before a cube is touched. A turn itself cannot fail.
//!
//! ## Architecture
//!
//! - **Six Owned Faces**: A `Cube` holds one `Face` per label in a `FaceMap`,
//!   so faces can never alias or go missing.
//!
//! - **Copy-Then-Write Edge Cycling**: The four bordering strips are copied
//!   into owned buffers before any is written back.
//!
//! - **Traceable Facelets**: Each facelet remembers its home row and column,
//!   so orientation mistakes show up in tests, not just color mismatches.
//!
//! ## Modules
//!
//! - `core`: Colors, face labels, topology, moves, configuration, errors
//! - `face`: NxN face grids with rotation and side strips
//! - `cube`: The cube, quarter turns, and text rendering

pub mod core;
pub mod face;
pub mod cube;

// Re-export commonly used types
pub use crate::core::{
    Color, Facelet,
    FaceLabel, FaceMap,
    Adjacency, Side, StripRef,
    Direction, Turn,
    ColorScheme, CubeConfig,
    CubeError, CubeResult,
};

pub use crate::face::{Face, Strip};

pub use crate::cube::{Cube, RenderStyle, render_cube, render_face};
