//! Shared types module - plain data used by every layer
//!
//! This crate defines the fundamental types passed between the puzzle core,
//! the frame driver, the input mapping and the terminal renderer. Everything
//! here is plain data with no dependencies.
//!
//! # Board Dimensions
//!
//! The board size is configurable; these are only the defaults:
//!
//! - **Width**: 10 columns (indexed 0..width, left to right)
//! - **Height**: 20 rows (indexed 0..height, top to bottom)
//! - Rows above the board (`y < 0`) exist for spawning and rotating only.
//!
//! # Timing Defaults
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal runner |
//! | `DEFAULT_MOVE_INTERVAL_MS` | 100 | Repeat interval of a held direction key |
//! | `DEFAULT_DROP_INTERVAL_MS` | 100 | Gravity interval |
//! | `DEFAULT_LOCK_DELAY_MS` | 2000 | Grounded time before an automatic lock |
//!
//! # Examples
//!
//! ```
//! use tui_polyomino_types::{CellState, GameAction, Rgb};
//!
//! assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
//! assert_eq!(GameAction::RotateCw.rotation_delta(), Some(1));
//! assert!(CellState::Locked.is_filled());
//! assert_eq!(Rgb::new(0, 255, 255).half(), Rgb::new(0, 127, 127));
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Largest board edge accepted by configuration
pub const MAX_BOARD_EDGE: u16 = 100;

/// Default render-space edge length of one cell
pub const DEFAULT_CELL_SIZE: f32 = 1.0;

/// Gap added around each cell in render space
pub const CELL_PADDING: f32 = 0.05;

/// Frame interval of the terminal runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Repeat interval for a held direction key
pub const DEFAULT_MOVE_INTERVAL_MS: u32 = 100;

/// Gravity interval (one row per interval)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 100;

/// Grounded time before the piece locks on its own
pub const DEFAULT_LOCK_DELAY_MS: u32 = 2000;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same hue at half intensity (outline/shadow tone).
    pub const fn half(self) -> Self {
        Self::new(self.r / 2, self.g / 2, self.b / 2)
    }
}

/// State of one board cell
///
/// - **Empty**: nothing there
/// - **Moving**: covered by the active piece
/// - **Locked**: part of the settled stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Moving,
    Locked,
}

impl CellState {
    pub fn is_filled(self) -> bool {
        !matches!(self, CellState::Empty)
    }
}

/// Horizontal or downward direction of a held movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Board delta `(dx, dy)` for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Discrete actions the driver can apply to the puzzle
///
/// Each action maps to exactly one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop the piece to rest and lock it
    HardDrop,
    /// Rotate a quarter turn clockwise
    RotateCw,
    /// Rotate a quarter turn counter-clockwise
    RotateCcw,
    /// Rotate a half turn
    Rotate180,
    /// Hold the active shape, or swap it with the held one
    Store,
    /// Clear the board and start over
    Restart,
    /// Switch to the next shape pack and rebuild the game
    CyclePack,
}

impl GameAction {
    /// Parse action from a camelCase or lowercase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_polyomino_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("store"), Some(GameAction::Store));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "rotate180" => Some(GameAction::Rotate180),
            "store" => Some(GameAction::Store),
            "restart" => Some(GameAction::Restart),
            "cyclepack" => Some(GameAction::CyclePack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Rotate180 => "rotate180",
            GameAction::Store => "store",
            GameAction::Restart => "restart",
            GameAction::CyclePack => "cyclePack",
        }
    }

    /// Quarter-turn delta for rotation actions.
    pub fn rotation_delta(&self) -> Option<i32> {
        match self {
            GameAction::RotateCw => Some(1),
            GameAction::RotateCcw => Some(-1),
            GameAction::Rotate180 => Some(2),
            _ => None,
        }
    }

    /// Movement direction for directional actions.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::SoftDrop => Some(Direction::Down),
            _ => None,
        }
    }

    /// Whether the action is still accepted once the game is over.
    pub fn allowed_after_game_over(&self) -> bool {
        matches!(self, GameAction::Restart | GameAction::CyclePack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_round_trip() {
        let all = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Rotate180,
            GameAction::Store,
            GameAction::Restart,
            GameAction::CyclePack,
        ];
        for action in all {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn rotation_and_direction_are_disjoint() {
        assert_eq!(GameAction::Rotate180.rotation_delta(), Some(2));
        assert_eq!(GameAction::Rotate180.direction(), None);
        assert_eq!(GameAction::SoftDrop.direction(), Some(Direction::Down));
        assert_eq!(GameAction::SoftDrop.rotation_delta(), None);
        assert_eq!(Direction::Left.delta(), (-1, 0));
    }

    #[test]
    fn only_restart_and_reload_survive_game_over() {
        assert!(GameAction::Restart.allowed_after_game_over());
        assert!(GameAction::CyclePack.allowed_after_game_over());
        assert!(!GameAction::HardDrop.allowed_after_game_over());
        assert!(!GameAction::Store.allowed_after_game_over());
    }

    #[test]
    fn default_cell_state_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
        assert!(!CellState::Empty.is_filled());
        assert!(CellState::Moving.is_filled());
    }
}
