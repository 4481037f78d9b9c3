//! Game configuration snapshot
//!
//! The core never loads configuration. Callers build a [`GameConfig`] (by hand,
//! from CLI flags, or from a JSON file) and pass it to
//! [`Puzzle::new`](crate::Puzzle::new) or [`Puzzle::reload`](crate::Puzzle::reload),
//! which apply it atomically.

use serde::{Deserialize, Serialize};

use crate::catalog::ShapePack;
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_CELL_SIZE, DEFAULT_DROP_INTERVAL_MS,
    DEFAULT_LOCK_DELAY_MS, DEFAULT_MOVE_INTERVAL_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub cell_size: f32,
    pub pack: ShapePack,
    /// Repeat interval of a held direction
    pub move_interval_ms: u32,
    /// Gravity interval
    pub drop_interval_ms: u32,
    /// Grounded time before an automatic lock
    pub lock_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            pack: ShapePack::Tetromino,
            move_interval_ms: DEFAULT_MOVE_INTERVAL_MS,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            lock_delay_ms: DEFAULT_LOCK_DELAY_MS,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_pack(mut self, pack: ShapePack) -> Self {
        self.pack = pack;
        self
    }
}
