//! Polyomino module - immutable shape templates and rotation geometry
//!
//! A shape is a bounding box with a row-major fill mask and a color. Shapes are
//! built once per catalog and shared through [`ShapeRef`]; pieces never copy
//! the mask.
//!
//! Rotation is computed, not tabulated: [`rotate_local`] maps a local cell of
//! the unrotated box to its position after `rotation` clockwise quarter turns.

use std::sync::Arc;

use crate::types::Rgb;

/// Shared, read-only handle to a catalog shape
pub type ShapeRef = Arc<Polyomino>;

/// Immutable shape template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polyomino {
    name: &'static str,
    width: u8,
    height: u8,
    /// Row-major fill mask (y * width + x)
    cells: Vec<bool>,
    color: Rgb,
}

impl Polyomino {
    /// Build a shape from a `0/1` mask.
    ///
    /// Panics if a dimension is zero or the mask length is not `width * height`.
    pub fn new(name: &'static str, width: u8, height: u8, mask: &[u8], color: Rgb) -> Self {
        assert!(width > 0 && height > 0, "shape {name} has an empty bounding box");
        assert_eq!(
            mask.len(),
            width as usize * height as usize,
            "shape {name} mask does not match its bounding box"
        );

        Self {
            name,
            width,
            height,
            cells: mask.iter().map(|&v| v != 0).collect(),
            color,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Whether local cell `(x, y)` of the unrotated box is filled.
    /// Out-of-box coordinates are never filled.
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return false;
        }
        self.cells[(y * self.width() + x) as usize]
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Bounding box `(width, height)` after `rotation` quarter turns.
    pub fn rotated_size(&self, rotation: i32) -> (i32, i32) {
        if rotation.rem_euclid(2) == 0 {
            (self.width(), self.height())
        } else {
            (self.height(), self.width())
        }
    }

    /// Rotate a local coordinate of this shape's box.
    #[inline]
    pub fn rotate(&self, x: i32, y: i32, rotation: i32) -> (i32, i32) {
        rotate_local((self.width(), self.height()), x, y, rotation)
    }

    /// Local coordinates of every filled cell after `rotation` quarter turns.
    pub fn filled_cells(&self, rotation: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let w = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| {
                let i = i as i32;
                self.rotate(i % w, i / w, rotation)
            })
    }
}

/// Map local cell `(x, y)` of a `(w, h)` box through `rotation` clockwise
/// quarter turns.
///
/// Both the coordinate and the rotation are wrapped first, so negative inputs
/// are valid: `x` into `[0, w)`, `y` into `[0, h)`, `rotation` into `[0, 4)`.
///
/// # Examples
///
/// ```
/// use tui_polyomino_core::rotate_local;
///
/// // 3x2 box: the top-left corner goes to the top-right after one turn.
/// assert_eq!(rotate_local((3, 2), 0, 0, 1), (1, 0));
/// assert_eq!(rotate_local((3, 2), 0, 0, -1), (0, 2));
/// ```
pub fn rotate_local(size: (i32, i32), x: i32, y: i32, rotation: i32) -> (i32, i32) {
    let (w, h) = size;
    let xw = x.rem_euclid(w);
    let yw = y.rem_euclid(h);

    match rotation.rem_euclid(4) {
        1 => (h - 1 - yw, xw),
        2 => (w - 1 - xw, h - 1 - yw),
        3 => (yw, w - 1 - xw),
        _ => (xw, yw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Polyomino {
        Polyomino::new("L", 2, 3, &[1, 0, 1, 0, 1, 1], Rgb::new(255, 165, 0))
    }

    #[test]
    fn rotate_local_quarter_turns() {
        // 2x3 box
        assert_eq!(rotate_local((2, 3), 1, 2, 0), (1, 2));
        assert_eq!(rotate_local((2, 3), 1, 2, 1), (0, 1));
        assert_eq!(rotate_local((2, 3), 1, 2, 2), (0, 0));
        assert_eq!(rotate_local((2, 3), 1, 2, 3), (2, 0));
    }

    #[test]
    fn rotate_local_wraps_inputs() {
        assert_eq!(rotate_local((2, 3), -1, -1, 0), (1, 2));
        assert_eq!(rotate_local((2, 3), 3, 4, 0), (1, 1));
        assert_eq!(rotate_local((2, 3), 0, 0, 5), rotate_local((2, 3), 0, 0, 1));
        assert_eq!(rotate_local((2, 3), 0, 0, -3), rotate_local((2, 3), 0, 0, 1));
    }

    #[test]
    fn filled_cells_stay_inside_rotated_box() {
        let shape = l_shape();
        for rotation in 0..4 {
            let (w, h) = shape.rotated_size(rotation);
            let cells: Vec<_> = shape.filled_cells(rotation).collect();
            assert_eq!(cells.len(), 4);
            for (x, y) in cells {
                assert!(x >= 0 && x < w && y >= 0 && y < h, "rot {rotation}: ({x},{y})");
            }
        }
    }

    #[test]
    fn l_shape_turned_once() {
        let shape = l_shape();
        let mut cells: Vec<_> = shape.filled_cells(1).collect();
        cells.sort();
        // X X X
        // X . .
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (2, 0)]);
    }

    #[test]
    fn is_filled_outside_box_is_false() {
        let shape = l_shape();
        assert!(shape.is_filled(0, 0));
        assert!(!shape.is_filled(1, 0));
        assert!(!shape.is_filled(-1, 0));
        assert!(!shape.is_filled(0, 3));
    }

    #[test]
    #[should_panic(expected = "mask does not match")]
    fn mismatched_mask_panics() {
        Polyomino::new("bad", 2, 2, &[1, 1, 1], Rgb::BLACK);
    }
}
