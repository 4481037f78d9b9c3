//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block puzzle and nothing else.
//! It has **no dependencies** on the terminal, input devices or a clock, so
//! it can be driven headless from tests and benchmarks.
//!
//! # Module Structure
//!
//! - [`polyomino`]: shape masks and quarter-turn rotation math
//! - [`catalog`]: the built-in tetromino and pentomino packs
//! - [`grid`]: the board, cell lookup and full-row collapse
//! - [`piece`]: the active piece (shape, origin, rotation)
//! - [`puzzle`]: the state machine: spawn, move, rotate, lock, hold, reset
//! - [`snapshot`]: a read-only frame view for renderers
//! - [`config`]: the configuration snapshot consumed at construction and reload
//!
//! # Game Rules
//!
//! - **Round-robin draw**: shapes come from the catalog in order, wrapping
//! - **Wall kicks**: a fixed list of eleven offsets is tried on every rotation
//! - **Lock delay**: a grounded piece locks once its timer runs out; a hard
//!   drop locks at once
//! - **Hold**: store or swap the active shape, once per lock
//! - **Scoring**: one point per cell of every cleared row
//! - **Game over**: a piece that cannot settle with its top row on the board
//!
//! # Example
//!
//! ```
//! use tui_polyomino_core::{GameConfig, Puzzle, Vec2i};
//!
//! let mut puzzle = Puzzle::new(&GameConfig::default());
//! assert_eq!(puzzle.piece().shape.name(), "I");
//!
//! puzzle.move_by(Vec2i::new(1, 0));
//! puzzle.rotate(1);
//! let event = puzzle.lock().unwrap();
//!
//! assert!(!event.game_over);
//! assert_eq!(puzzle.piece().shape.name(), "J");
//! ```

pub mod catalog;
pub mod config;
pub mod grid;
pub mod piece;
pub mod polyomino;
pub mod puzzle;
pub mod snapshot;

pub use tui_polyomino_types as types;

pub use catalog::{pentomino_pack, tetromino_pack, ShapePack};
pub use config::GameConfig;
pub use grid::{Cell, ClearedRows, Grid};
pub use piece::{wrap_rotation, Piece, Vec2i};
pub use polyomino::{rotate_local, Polyomino, ShapeRef};
pub use puzzle::{LockEvent, Puzzle, ROTATION_OFFSETS};
pub use snapshot::{ActiveSnapshot, PuzzleSnapshot, SnapshotCell};
