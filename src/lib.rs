//! TUI Polyomino (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the command-line
//! configuration layer used by the binary.

pub mod cli;

pub use tui_polyomino_core as core;
pub use tui_polyomino_engine as engine;
pub use tui_polyomino_input as input;
pub use tui_polyomino_term as term;
pub use tui_polyomino_types as types;
