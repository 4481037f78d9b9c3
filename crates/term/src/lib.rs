//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view renders into a plain
//! framebuffer, and the renderer flushes that framebuffer to the terminal.
//!
//! - `core` stays deterministic and testable
//! - cells are drawn 2 columns wide to keep the board square-ish
//! - only changed runs are written each frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_polyomino_core as core;
pub use tui_polyomino_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, BoardRect, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
