//! Frame driver for the puzzle core
//!
//! [`Session`] sits between an input source and [`Puzzle`]: each frame it
//! applies the queued discrete actions, repeats the held direction on the
//! move interval, then runs gravity on the drop interval.

pub mod session;

pub use session::{FrameReport, Session, SessionStats};
pub use tui_polyomino_core::{GameConfig, LockEvent, Puzzle};
