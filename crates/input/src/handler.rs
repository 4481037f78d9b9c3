//! Held-direction tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use crossterm::event::KeyCode;

use crate::map::direction_of;
use crate::types::{Direction, GameAction};

// In terminals without key-release events, a short timeout keeps a single tap
// from turning into a sustained "held" state that repeats on every interval.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Which direction keys are down
///
/// The driver asks [`HeldKeys::held`] once per frame and repeats that move on
/// its own interval. Left wins over right, right over down.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    left: bool,
    right: bool,
    down: bool,
    idle_ms: u32,
    key_release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            left: false,
            right: false,
            down: false,
            idle_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    fn slot(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Down => &mut self.down,
        }
    }

    /// Record a key press. A fresh press of a direction key yields its
    /// immediate move; repeats of an already held key yield nothing.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let direction = direction_of(code)?;
        self.idle_ms = 0;

        let slot = self.slot(direction);
        if *slot {
            return None;
        }
        *slot = true;
        Some(match direction {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Down => GameAction::SoftDrop,
        })
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(direction) = direction_of(code) {
            *self.slot(direction) = false;
        }
    }

    /// Age the held keys; everything releases once no direction key has been
    /// seen for the release timeout.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > self.key_release_timeout_ms {
            self.release_all();
        }
    }

    /// Direction to repeat this frame.
    pub fn held(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }

    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
        self.down = false;
    }

    pub fn reset(&mut self) {
        self.release_all();
        self.idle_ms = 0;
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
