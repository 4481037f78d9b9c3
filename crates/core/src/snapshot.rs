use crate::catalog::ShapePack;
use crate::piece::Vec2i;
use crate::types::{CellState, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SnapshotCell {
    pub state: CellState,
    pub color: Rgb,
    /// Empty cell where the active piece would land
    pub ghost: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub name: &'static str,
    pub origin: Vec2i,
    pub rotation: u8,
    pub color: Rgb,
    pub landing: Vec2i,
}

/// Read-only view of one frame: the grid with the active piece overlaid as
/// `Moving`, plus the side-panel values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PuzzleSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, `width * height` entries
    pub cells: Vec<SnapshotCell>,
    pub active: Option<ActiveSnapshot>,
    pub held: Option<&'static str>,
    pub next: Option<&'static str>,
    pub pack: Option<ShapePack>,
    pub score: u32,
    pub game_over: bool,
    pub has_swapped: bool,
    pub lock_timer_ms: u32,
}

impl PuzzleSnapshot {
    pub fn get(&self, x: u16, y: u16) -> Option<SnapshotCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn row(&self, y: u16) -> &[SnapshotCell] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }
}
