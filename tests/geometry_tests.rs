//! Cross-check quarter turns against a 3D sticker model.
//!
//! Every facelet location is mapped to a sticker in space: the integer
//! position of its cubie (doubled, so cubie centers are `2k - (N-1)` and the
//! surface sits at `±N`) and the outward normal of its face. A quarter turn
//! of a face is then a rotation about that face's normal applied to every
//! sticker in the outer layer. The engine must put every facelet exactly
//! where the model does.

use std::collections::HashMap;

use rust_cube::core::{Direction, FaceLabel, Facelet};
use rust_cube::cube::Cube;

type Vec3 = [i64; 3];

/// Sticker position and outward normal.
type Sticker = (Vec3, Vec3);

fn coord(k: usize, n: usize) -> i64 {
    2 * k as i64 - (n as i64 - 1)
}

fn normal(label: FaceLabel) -> Vec3 {
    match label {
        FaceLabel::Front => [0, 0, 1],
        FaceLabel::Back => [0, 0, -1],
        FaceLabel::Right => [1, 0, 0],
        FaceLabel::Left => [-1, 0, 0],
        FaceLabel::Up => [0, 1, 0],
        FaceLabel::Down => [0, -1, 0],
    }
}

/// Sticker for cell (row, col) of `label`, faces seen from outside on the
/// standard net (Up above Front, Down below, Left/Right/Back around).
fn sticker(label: FaceLabel, row: usize, col: usize, n: usize) -> Sticker {
    let (s, r, c) = (n as i64, coord(row, n), coord(col, n));
    let position = match label {
        FaceLabel::Front => [c, -r, s],
        FaceLabel::Back => [-c, -r, -s],
        FaceLabel::Right => [s, -r, -c],
        FaceLabel::Left => [-s, -r, c],
        FaceLabel::Up => [c, s, r],
        FaceLabel::Down => [c, -s, -r],
    };
    (position, normal(label))
}

fn dot(a: Vec3, b: Vec3) -> i64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rotate `v` 90° clockwise about `axis`, looking down the axis at the face.
fn clockwise(v: Vec3, axis: Vec3) -> Vec3 {
    let c = cross(axis, v);
    let d = dot(axis, v);
    [
        axis[0] * d - c[0],
        axis[1] * d - c[1],
        axis[2] * d - c[2],
    ]
}

fn sticker_map(cube: &Cube) -> HashMap<Sticker, Facelet> {
    let n = cube.size();
    let mut map = HashMap::new();
    for label in FaceLabel::all() {
        let face = cube.face(label);
        for row in 0..n {
            for col in 0..n {
                map.insert(sticker(label, row, col, n), face[(row, col)]);
            }
        }
    }
    map
}

/// What the sticker model says the cube looks like after the turn.
fn model_turn(before: &Cube, label: FaceLabel, direction: Direction) -> HashMap<Sticker, Facelet> {
    let n = before.size() as i64;
    let axis = normal(label);

    sticker_map(before)
        .into_iter()
        .map(|((mut position, mut facing), facelet)| {
            if dot(position, axis) >= n - 1 {
                for _ in 0..direction.quarter_turns() {
                    position = clockwise(position, axis);
                    facing = clockwise(facing, axis);
                }
            }
            ((position, facing), facelet)
        })
        .collect()
}

fn assert_matches_model(cube: &Cube, label: FaceLabel, direction: Direction) {
    let expected = model_turn(cube, label, direction);

    let mut turned = cube.clone();
    turned.rotate(label, direction);
    let actual = sticker_map(&turned);

    assert_eq!(expected.len(), actual.len());
    for (sticker, facelet) in &actual {
        assert_eq!(
            expected.get(sticker),
            Some(facelet),
            "N={} turning {label} {direction}: sticker {sticker:?}",
            cube.size()
        );
    }
}

#[test]
fn test_model_sanity() {
    // The clockwise rotation about +z sends up to right.
    assert_eq!(clockwise([0, 1, 0], [0, 0, 1]), [1, 0, 0]);
    // Every location maps to a distinct sticker.
    let cube = Cube::new(3).unwrap();
    assert_eq!(sticker_map(&cube).len(), 54);
}

#[test]
fn test_every_turn_matches_model_from_solved() {
    for n in 1..=5 {
        let cube = Cube::new(n).unwrap();
        for label in FaceLabel::all() {
            for direction in [Direction::Forward, Direction::Reverse] {
                assert_matches_model(&cube, label, direction);
            }
        }
    }
}

#[test]
fn test_every_turn_matches_model_from_mixed_state() {
    // Start from a cube where faces already carry foreign facelets, so a
    // strip written with the wrong orientation or to the wrong side shows up.
    for n in 2..=4 {
        let mut cube = Cube::new(n).unwrap();
        for (label, direction) in [
            (FaceLabel::Front, Direction::Forward),
            (FaceLabel::Up, Direction::Reverse),
            (FaceLabel::Right, Direction::Forward),
            (FaceLabel::Back, Direction::Forward),
            (FaceLabel::Left, Direction::Reverse),
            (FaceLabel::Down, Direction::Forward),
        ] {
            cube.rotate(label, direction);
        }

        for label in FaceLabel::all() {
            for direction in [Direction::Forward, Direction::Reverse] {
                assert_matches_model(&cube, label, direction);
            }
        }
    }
}

#[test]
fn test_cubies_stay_together() {
    // On a 3x3 the U-F-R corner stickers travel together under F.
    let mut cube = Cube::new(3).unwrap();
    let up = cube.face(FaceLabel::Up)[(2, 2)];
    let front = cube.face(FaceLabel::Front)[(0, 2)];
    let right = cube.face(FaceLabel::Right)[(0, 0)];

    cube.rotate(FaceLabel::Front, Direction::Forward);

    // The corner moves to D-F-R: Front (2,2), Right (2,0), Down (0,2).
    assert_eq!(cube.face(FaceLabel::Front)[(2, 2)], front);
    assert_eq!(cube.face(FaceLabel::Right)[(2, 0)], up);
    assert_eq!(cube.face(FaceLabel::Down)[(0, 2)], right);
}
