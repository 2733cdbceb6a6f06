//! Plain-text rendering.
//!
//! One line per row, cells separated by a single space. The cube is printed
//! face by face, each face preceded by its name.

use std::fmt;

use crate::core::{FaceLabel, Facelet};
use crate::face::Face;

use super::state::Cube;

/// How to print each cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Color name only, e.g. `green`.
    #[default]
    Colors,
    /// 1-based home row and column plus color, e.g. `13 green`.
    Tagged,
}

/// Order in which `render_cube` prints faces.
pub const FACE_ORDER: [FaceLabel; 6] = [
    FaceLabel::Front,
    FaceLabel::Up,
    FaceLabel::Down,
    FaceLabel::Right,
    FaceLabel::Left,
    FaceLabel::Back,
];

fn render_cell(facelet: &Facelet, style: RenderStyle) -> String {
    match style {
        RenderStyle::Colors => facelet.color.to_string(),
        RenderStyle::Tagged => facelet.tag(),
    }
}

/// Render one face, one line per row.
#[must_use]
pub fn render_face(face: &Face, style: RenderStyle) -> String {
    let mut out = String::new();
    for row in face.rows() {
        let cells: Vec<String> = row.iter().map(|f| render_cell(f, style)).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Render every face in `FACE_ORDER`.
#[must_use]
pub fn render_cube(cube: &Cube, style: RenderStyle) -> String {
    let mut out = String::new();
    for label in FACE_ORDER {
        out.push_str(label.name());
        out.push('\n');
        out.push_str(&render_face(cube.face(label), style));
    }
    out
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_face(self, RenderStyle::Colors))
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_cube(self, RenderStyle::Colors))
    }
}
