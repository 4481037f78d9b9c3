//! Active piece state

use std::ops::{Add, AddAssign};

use crate::polyomino::ShapeRef;

/// Integer board coordinate or offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Vec2i = Vec2i { x: 0, y: 0 };
    pub const DOWN: Vec2i = Vec2i { x: 0, y: 1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2i {
    fn add_assign(&mut self, rhs: Vec2i) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl From<(i32, i32)> for Vec2i {
    fn from((x, y): (i32, i32)) -> Self {
        Vec2i::new(x, y)
    }
}

/// The falling piece: a shared shape, the board position of its bounding-box
/// corner, and its quarter-turn count.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub shape: ShapeRef,
    pub origin: Vec2i,
    /// Always in `0..4`
    pub rotation: u8,
}

impl Piece {
    pub fn new(shape: ShapeRef, origin: Vec2i) -> Self {
        Self {
            shape,
            origin,
            rotation: 0,
        }
    }

    /// Board cells covered at `origin` and `rotation` (may lie off the board).
    pub fn cells_at(&self, origin: Vec2i, rotation: i32) -> impl Iterator<Item = Vec2i> + '_ {
        self.shape
            .filled_cells(rotation)
            .map(move |(x, y)| Vec2i::new(origin.x + x, origin.y + y))
    }

    /// Board cells covered right now.
    pub fn footprint(&self) -> impl Iterator<Item = Vec2i> + '_ {
        self.cells_at(self.origin, self.rotation as i32)
    }
}

/// Normalize any quarter-turn count into `0..4`.
#[inline]
pub fn wrap_rotation(rotation: i32) -> u8 {
    rotation.rem_euclid(4) as u8
}
