//! Catalog module - the fixed shape packs
//!
//! Each pack is an ordered list of shapes. The order matters: the puzzle
//! draws shapes round-robin in exactly this order.

use serde::{Deserialize, Serialize};

use crate::polyomino::{Polyomino, ShapeRef};
use crate::types::Rgb;

/// Selectable shape pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapePack {
    /// The 7 four-cell shapes
    #[default]
    Tetromino,
    /// The 12 five-cell shapes
    Pentomino,
}

impl ShapePack {
    pub const ALL: [ShapePack; 2] = [ShapePack::Tetromino, ShapePack::Pentomino];

    /// Parse pack name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_polyomino_core::ShapePack;
    ///
    /// assert_eq!(ShapePack::from_str("Pentomino"), Some(ShapePack::Pentomino));
    /// assert_eq!(ShapePack::from_str("hexomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tetromino" => Some(ShapePack::Tetromino),
            "pentomino" => Some(ShapePack::Pentomino),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapePack::Tetromino => "tetromino",
            ShapePack::Pentomino => "pentomino",
        }
    }

    /// The pack after this one (wraps).
    pub fn cycle(self) -> Self {
        match self {
            ShapePack::Tetromino => ShapePack::Pentomino,
            ShapePack::Pentomino => ShapePack::Tetromino,
        }
    }

    /// Build the ordered catalog for this pack.
    pub fn shapes(&self) -> Vec<ShapeRef> {
        match self {
            ShapePack::Tetromino => tetromino_pack(),
            ShapePack::Pentomino => pentomino_pack(),
        }
    }
}

/// Tetrominoes in draw order: I, J, L, O, S, T, Z
pub fn tetromino_pack() -> Vec<ShapeRef> {
    vec![
        shape("I", 4, 1, &[1, 1, 1, 1], Rgb::new(0, 255, 255)),
        shape("J", 2, 3, &[0, 1, 0, 1, 1, 1], Rgb::new(0, 0, 255)),
        shape("L", 2, 3, &[1, 0, 1, 0, 1, 1], Rgb::new(255, 165, 0)),
        shape("O", 2, 2, &[1, 1, 1, 1], Rgb::new(255, 255, 0)),
        shape("S", 3, 2, &[0, 1, 1, 1, 1, 0], Rgb::new(0, 255, 0)),
        shape("T", 3, 2, &[1, 1, 1, 0, 1, 0], Rgb::new(128, 0, 128)),
        shape("Z", 3, 2, &[1, 1, 0, 0, 1, 1], Rgb::new(255, 0, 0)),
    ]
}

/// Pentominoes in draw order: F, I, L, N, P, T, U, V, W, X, Y, Z
#[rustfmt::skip]
pub fn pentomino_pack() -> Vec<ShapeRef> {
    vec![
        shape("F", 3, 3, &[
            0, 1, 1,
            1, 1, 0,
            0, 1, 0,
        ], Rgb::new(255, 105, 180)),
        shape("I", 1, 5, &[1, 1, 1, 1, 1], Rgb::new(0, 255, 255)),
        shape("L", 2, 4, &[
            1, 0,
            1, 0,
            1, 0,
            1, 1,
        ], Rgb::new(255, 140, 0)),
        shape("N", 2, 4, &[
            0, 1,
            0, 1,
            1, 1,
            1, 0,
        ], Rgb::new(0, 128, 128)),
        shape("P", 2, 3, &[
            1, 1,
            1, 1,
            1, 0,
        ], Rgb::new(255, 0, 255)),
        shape("T", 3, 3, &[
            1, 1, 1,
            0, 1, 0,
            0, 1, 0,
        ], Rgb::new(128, 0, 128)),
        shape("U", 3, 2, &[
            1, 0, 1,
            1, 1, 1,
        ], Rgb::new(0, 128, 255)),
        shape("V", 3, 3, &[
            1, 0, 0,
            1, 0, 0,
            1, 1, 1,
        ], Rgb::new(0, 255, 0)),
        shape("W", 3, 3, &[
            1, 0, 0,
            1, 1, 0,
            0, 1, 1,
        ], Rgb::new(255, 255, 0)),
        shape("X", 3, 3, &[
            0, 1, 0,
            1, 1, 1,
            0, 1, 0,
        ], Rgb::new(128, 128, 128)),
        shape("Y", 2, 4, &[
            0, 1,
            1, 1,
            0, 1,
            0, 1,
        ], Rgb::new(255, 0, 0)),
        shape("Z", 3, 3, &[
            1, 1, 0,
            0, 1, 0,
            0, 1, 1,
        ], Rgb::new(0, 0, 255)),
    ]
}

fn shape(name: &'static str, width: u8, height: u8, mask: &[u8], color: Rgb) -> ShapeRef {
    ShapeRef::new(Polyomino::new(name, width, height, mask, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tetromino_pack_order_and_size() {
        let pack = tetromino_pack();
        let names: Vec<_> = pack.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["I", "J", "L", "O", "S", "T", "Z"]);
        assert!(pack.iter().all(|s| s.filled_count() == 4));
    }

    #[test]
    fn pentomino_pack_order_and_size() {
        let pack = pentomino_pack();
        let names: Vec<_> = pack.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["F", "I", "L", "N", "P", "T", "U", "V", "W", "X", "Y", "Z"]);
        assert!(pack.iter().all(|s| s.filled_count() == 5));
    }

    #[test]
    fn pack_cycle_visits_every_pack() {
        let mut pack = ShapePack::Tetromino;
        for expected in ShapePack::ALL.iter().cycle().skip(1).take(4) {
            pack = pack.cycle();
            assert_eq!(pack, *expected);
        }
    }

    #[test]
    fn pack_names_round_trip() {
        for pack in ShapePack::ALL {
            assert_eq!(ShapePack::from_str(pack.as_str()), Some(pack));
        }
    }

    #[test]
    fn pack_serializes_lowercase() {
        let json = serde_json::to_string(&ShapePack::Pentomino).unwrap();
        assert_eq!(json, "\"pentomino\"");
        let back: ShapePack = serde_json::from_str("\"tetromino\"").unwrap();
        assert_eq!(back, ShapePack::Tetromino);
    }
}
