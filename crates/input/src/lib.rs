//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks
//! held direction keys so the driver can repeat them on its move interval,
//! including in terminals that never report key releases.

pub mod handler;
pub mod map;

pub use tui_polyomino_types as types;

pub use handler::HeldKeys;
pub use map::{direction_of, handle_key_event, should_quit};
