//! The cube and its text rendering.
//!
//! - `state`: `Cube`, the six faces and the quarter-turn engine
//! - `render`: plain-text output for faces and cubes

pub mod state;
pub mod render;

pub use state::Cube;
pub use render::{render_cube, render_face, RenderStyle, FACE_ORDER};
