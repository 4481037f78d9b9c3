//! Grid module - the board of cells
//!
//! The grid is a `width x height` array of cells in one flat, row-major `Vec`
//! (index `y * width + x`). Coordinates: `x` grows left to right, `y` grows top
//! to bottom. The grid itself only ever stores `Empty` and `Locked` cells; the
//! active piece is overlaid by the puzzle at query time.
//!
//! Every cell carries a precomputed render-space position so a renderer can
//! place one instance per cell without redoing the layout math.

use arrayvec::ArrayVec;

use crate::types::{CellState, Rgb, CELL_PADDING, MAX_BOARD_EDGE};

/// Row indices removed by one [`Grid::clear_full_rows`] pass, bottom to top
pub type ClearedRows = ArrayVec<u16, { MAX_BOARD_EDGE as usize }>;

/// One board position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub state: CellState,
    /// Meaningful only when the cell is not empty
    pub color: Rgb,
    /// Render-space center, fixed when the grid is built
    pub position: [f32; 2],
}

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    cell_size: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build an empty grid.
    ///
    /// Panics when a dimension is zero or larger than [`MAX_BOARD_EDGE`].
    pub fn new(width: u16, height: u16, cell_size: f32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert!(
            width <= MAX_BOARD_EDGE && height <= MAX_BOARD_EDGE,
            "grid dimensions must not exceed {MAX_BOARD_EDGE}"
        );

        let padded = cell_size + CELL_PADDING;
        let half_total = [width as f32 * padded * 0.5, height as f32 * padded * 0.5];
        let half_cell = padded * 0.5;

        let len = width as usize * height as usize;
        let cells = (0..len)
            .map(|i| {
                let x = (i % width as usize) as f32;
                let y = (i / width as usize) as f32;
                Cell {
                    state: CellState::Empty,
                    color: Rgb::BLACK,
                    position: [
                        x * padded - half_total[0] + half_cell,
                        -y * padded + half_total[1] - half_cell,
                    ],
                }
            })
            .collect();

        Self {
            width,
            height,
            cell_size,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.state == CellState::Empty)
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Render-space extent of the whole board, padding included
    pub fn total_size(&self) -> [f32; 2] {
        let padded = self.cell_size + CELL_PADDING;
        [self.width as f32 * padded, self.height as f32 * padded]
    }

    /// Flat index of `(x, y)`, `None` when off the board
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Locked and on the board
    pub fn is_locked(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c.state == CellState::Locked)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|c| c.state == CellState::Locked)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Lock `(x, y)` with `color`. Returns false when off the board.
    pub fn lock_cell(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i].state = CellState::Locked;
                self.cells[i].color = color;
                true
            }
            None => false,
        }
    }

    /// Empty every cell. Positions are kept.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.state = CellState::Empty;
            cell.color = Rgb::BLACK;
        }
    }

    /// Remove every fully locked row and collapse the rows above it.
    ///
    /// Single bottom-to-top pass: surviving rows are copied down to the next
    /// write row, preserving their order, and the vacated rows at the top are
    /// emptied. Only state and color move; positions belong to the slot.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y as u16);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    self.copy_row(read_y, write_y);
                }
            }
        }

        for y in 0..write_y {
            self.empty_row(y);
        }

        cleared
    }

    fn copy_row(&mut self, from: usize, to: usize) {
        let width = self.width as usize;
        for x in 0..width {
            let src = self.cells[from * width + x];
            let dst = &mut self.cells[to * width + x];
            dst.state = src.state;
            dst.color = src.color;
        }
    }

    fn empty_row(&mut self, y: usize) {
        let width = self.width as usize;
        for cell in &mut self.cells[y * width..(y + 1) * width] {
            cell.state = CellState::Empty;
            cell.color = Rgb::BLACK;
        }
    }
}
