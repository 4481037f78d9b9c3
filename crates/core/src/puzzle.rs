//! Puzzle module - the game state machine
//!
//! [`Puzzle`] owns the grid, the active piece, the held shape and the shape
//! catalog, and implements every rule: spawning, movement, rotation with wall
//! kicks, locking, line clears, hold/swap and game over.
//!
//! Rules worth knowing before reading the code:
//!
//! - **No errors**: an illegal move, a rotation with no valid kick, or a second
//!   hold before the next lock is simply declined (`false` / `None`).
//! - **Lazy footprint**: the grid only stores locked cells; the active piece is
//!   its origin and rotation, overlaid as `Moving` when queried.
//! - **Spawn above the board**: new pieces start fully above row 0 and are never
//!   checked at spawn time. A lock that cannot bring the piece's top row onto
//!   the board ends the game.
//! - **Round-robin draw**: shapes come from the catalog in order, wrapping.
//! - **Game over** is a flag. Only [`Puzzle::reset`] and [`Puzzle::reload`] act
//!   while it is set.

use crate::catalog::ShapePack;
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::piece::{wrap_rotation, Piece, Vec2i};
use crate::polyomino::ShapeRef;
use crate::snapshot::{ActiveSnapshot, PuzzleSnapshot, SnapshotCell};
use crate::types::CellState;

/// Wall-kick candidates, tried strictly in this order
///
/// Identity, single-axis nudges, diagonals, then the larger upward nudges a
/// long piece needs when rotating against the floor.
pub const ROTATION_OFFSETS: [Vec2i; 11] = [
    Vec2i::new(0, 0),
    Vec2i::new(-1, 0),
    Vec2i::new(1, 0),
    Vec2i::new(0, -1),
    Vec2i::new(0, 1),
    Vec2i::new(-1, -1),
    Vec2i::new(-1, 1),
    Vec2i::new(1, -1),
    Vec2i::new(1, 1),
    Vec2i::new(0, -2),
    Vec2i::new(0, -3),
];

/// Outcome of one lock attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub score_gained: u32,
    /// The piece could not settle on the board
    pub game_over: bool,
}

/// Complete puzzle state
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    catalog: Vec<ShapeRef>,
    /// `None` when built from a custom catalog
    pack: Option<ShapePack>,
    shape_index: usize,
    piece: Piece,
    held: Option<ShapeRef>,
    has_swapped: bool,
    lock_delay_ms: u32,
    lock_timer_ms: u32,
    score: u32,
    over: bool,
    last_event: Option<LockEvent>,
}

impl Puzzle {
    /// Build the grid and catalog described by `config` and spawn the first
    /// catalog shape.
    pub fn new(config: &GameConfig) -> Self {
        let grid = Grid::new(config.width, config.height, config.cell_size);
        let mut puzzle = Self::with_grid(grid, config.pack.shapes(), config.lock_delay_ms);
        puzzle.pack = Some(config.pack);
        puzzle
    }

    /// Start a puzzle on a prepared grid with a custom catalog.
    ///
    /// Panics if `catalog` is empty.
    pub fn with_grid(grid: Grid, catalog: Vec<ShapeRef>, lock_delay_ms: u32) -> Self {
        assert!(!catalog.is_empty(), "shape catalog must not be empty");

        let first = catalog[0].clone();
        let origin = spawn_origin(&grid, &first);
        Self {
            grid,
            catalog,
            pack: None,
            shape_index: 0,
            piece: Piece::new(first, origin),
            held: None,
            has_swapped: false,
            lock_delay_ms,
            lock_timer_ms: lock_delay_ms,
            score: 0,
            over: false,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn held(&self) -> Option<&ShapeRef> {
        self.held.as_ref()
    }

    pub fn catalog(&self) -> &[ShapeRef] {
        &self.catalog
    }

    pub fn pack(&self) -> Option<ShapePack> {
        self.pack
    }

    pub fn shape_index(&self) -> usize {
        self.shape_index
    }

    /// Shape the next round-robin draw will produce
    pub fn next_shape(&self) -> &ShapeRef {
        &self.catalog[(self.shape_index + 1) % self.catalog.len()]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn has_swapped(&self) -> bool {
        self.has_swapped
    }

    pub fn lock_delay_ms(&self) -> u32 {
        self.lock_delay_ms
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Replace the active piece with a fresh one of `shape`.
    ///
    /// The piece starts at rotation 0, horizontally centered, with its
    /// bottom row one row above the board. Declined while the game is over.
    pub fn spawn(&mut self, shape: ShapeRef) -> bool {
        if self.over {
            return false;
        }
        self.place(shape);
        true
    }

    fn place(&mut self, shape: ShapeRef) {
        let origin = spawn_origin(&self.grid, &shape);
        self.piece = Piece::new(shape, origin);
    }

    fn advance_shape(&mut self) -> ShapeRef {
        self.shape_index = (self.shape_index + 1) % self.catalog.len();
        self.catalog[self.shape_index].clone()
    }

    /// Would the piece fit after moving by `delta` and turning `delta_rot`
    /// quarter turns? Rows above the board are allowed.
    pub fn check_move(&self, delta: Vec2i, delta_rot: i32) -> bool {
        let origin = self.piece.origin + delta;
        let rotation = self.piece.rotation as i32 + delta_rot;
        self.fits(origin, rotation)
    }

    fn fits(&self, origin: Vec2i, rotation: i32) -> bool {
        let width = self.grid.width();
        let height = self.grid.height();
        self.piece
            .cells_at(origin, rotation)
            .all(|c| c.x >= 0 && c.x < width && c.y < height && !self.grid.is_locked(c.x, c.y))
    }

    /// Move the piece by `delta` if it fits.
    pub fn move_by(&mut self, delta: Vec2i) -> bool {
        if self.over || !self.check_move(delta, 0) {
            return false;
        }
        self.piece.origin += delta;
        true
    }

    /// First kick offset that lets the piece turn `delta_rot` quarter turns.
    pub fn kick_offset(&self, delta_rot: i32) -> Option<Vec2i> {
        ROTATION_OFFSETS
            .iter()
            .copied()
            .find(|&offset| self.check_move(offset, delta_rot))
    }

    /// Rotate by `delta_rot` quarter turns (clockwise positive), applying the
    /// first fitting kick offset.
    pub fn rotate(&mut self, delta_rot: i32) -> bool {
        if self.over {
            return false;
        }
        let Some(offset) = self.kick_offset(delta_rot) else {
            return false;
        };

        self.piece.origin += offset;
        self.piece.rotation = wrap_rotation(self.piece.rotation as i32 + delta_rot);
        true
    }

    /// Rows the piece can still fall
    pub fn drop_distance(&self) -> i32 {
        let rotation = self.piece.rotation as i32;
        let mut distance = 0;
        while self.fits(self.piece.origin + Vec2i::new(0, distance + 1), rotation) {
            distance += 1;
        }
        distance
    }

    /// Origin the piece would rest at after a hard drop
    pub fn landing_origin(&self) -> Vec2i {
        self.piece.origin + Vec2i::new(0, self.drop_distance())
    }

    /// Drop the piece to rest and commit it.
    ///
    /// If the settled piece's top row is still above the board the game ends
    /// and nothing is written to the grid. Otherwise the footprint is locked,
    /// full rows are resolved, the next catalog shape spawns, the hold is
    /// re-armed and the lock timer restarts.
    pub fn lock(&mut self) -> Option<LockEvent> {
        if self.over {
            return None;
        }

        while self.check_move(Vec2i::DOWN, 0) {
            self.piece.origin += Vec2i::DOWN;
        }

        if self.piece.origin.y < 0 {
            self.over = true;
            let event = LockEvent {
                rows_cleared: 0,
                score_gained: 0,
                game_over: true,
            };
            self.last_event = Some(event);
            return Some(event);
        }

        let color = self.piece.shape.color();
        for cell in self.piece.footprint() {
            self.grid.lock_cell(cell.x, cell.y, color);
        }

        let score_before = self.score;
        let rows_cleared = self.resolve();

        let next = self.advance_shape();
        self.place(next);
        self.has_swapped = false;
        self.lock_timer_ms = self.lock_delay_ms;

        let event = LockEvent {
            rows_cleared,
            score_gained: self.score - score_before,
            game_over: false,
        };
        self.last_event = Some(event);
        Some(event)
    }

    /// Clear every fully locked row, collapse the rows above, and score
    /// `width` per row. Returns the number of rows cleared.
    pub fn resolve(&mut self) -> u32 {
        if self.over {
            return 0;
        }
        let cleared = self.grid.clear_full_rows().len() as u32;
        self.score += cleared * self.grid.width() as u32;
        cleared
    }

    /// Hold the active shape (drawing the next one), or swap it with the held
    /// shape. Allowed once per lock.
    pub fn store(&mut self) -> bool {
        if self.over || self.has_swapped {
            return false;
        }

        let current = self.piece.shape.clone();
        let incoming = match self.held.take() {
            None => self.advance_shape(),
            Some(held) => {
                // The draw order still advances on a swap.
                self.advance_shape();
                held
            }
        };

        self.held = Some(current);
        self.place(incoming);
        self.has_swapped = true;
        true
    }

    /// Empty the board, zero the score, leave game over and spawn the next
    /// catalog shape. The held shape is kept.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.over = false;
        self.score = 0;
        self.lock_timer_ms = self.lock_delay_ms;
        self.last_event = None;

        let next = self.advance_shape();
        self.place(next);
    }

    /// Rebuild for a new configuration: new grid, new catalog, empty hold,
    /// then a reset. The new game starts from the head of the catalog.
    pub fn reload(&mut self, config: &GameConfig) {
        self.grid = Grid::new(config.width, config.height, config.cell_size);
        self.catalog = config.pack.shapes();
        self.pack = Some(config.pack);
        self.lock_delay_ms = config.lock_delay_ms;
        self.held = None;
        self.has_swapped = false;
        self.shape_index = self.catalog.len() - 1;
        self.reset();
    }

    /// Gravity: fall one row; while grounded, burn `elapsed_ms` of the lock
    /// timer and lock when it runs out.
    pub fn gravity_step(&mut self, elapsed_ms: u32) -> Option<LockEvent> {
        if self.over {
            return None;
        }

        self.move_by(Vec2i::DOWN);
        if self.check_move(Vec2i::DOWN, 0) {
            return None;
        }

        self.lock_timer_ms = self.lock_timer_ms.saturating_sub(elapsed_ms);
        if self.lock_timer_ms == 0 {
            self.lock()
        } else {
            None
        }
    }

    /// Is the piece resting on the stack or the floor?
    pub fn is_grounded(&self) -> bool {
        !self.check_move(Vec2i::DOWN, 0)
    }

    /// State of `(x, y)` with the active piece overlaid; `None` off the board.
    pub fn cell_state(&self, x: i32, y: i32) -> Option<CellState> {
        let cell = self.grid.get(x, y)?;
        if cell.state == CellState::Locked {
            return Some(CellState::Locked);
        }
        let target = Vec2i::new(x, y);
        if self.piece.footprint().any(|c| c == target) {
            Some(CellState::Moving)
        } else {
            Some(CellState::Empty)
        }
    }

    /// Fill `out` with the current frame, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        out.width = self.grid.width() as u16;
        out.height = self.grid.height() as u16;

        out.cells.clear();
        out.cells
            .extend(self.grid.cells().iter().map(|c| SnapshotCell {
                state: c.state,
                color: c.color,
                ghost: false,
            }));

        let color = self.piece.shape.color();
        let rotation = self.piece.rotation as i32;
        let landing = self.landing_origin();

        if !self.over {
            for c in self.piece.cells_at(landing, rotation) {
                if let Some(i) = self.grid.index(c.x, c.y) {
                    if out.cells[i].state == CellState::Empty {
                        out.cells[i].ghost = true;
                        out.cells[i].color = color;
                    }
                }
            }
        }

        for c in self.piece.footprint() {
            if let Some(i) = self.grid.index(c.x, c.y) {
                out.cells[i] = SnapshotCell {
                    state: CellState::Moving,
                    color,
                    ghost: false,
                };
            }
        }

        out.active = Some(ActiveSnapshot {
            name: self.piece.shape.name(),
            origin: self.piece.origin,
            rotation: self.piece.rotation,
            color,
            landing,
        });
        out.held = self.held.as_ref().map(|s| s.name());
        out.next = Some(self.next_shape().name());
        out.pack = self.pack;
        out.score = self.score;
        out.game_over = self.over;
        out.has_swapped = self.has_swapped;
        out.lock_timer_ms = self.lock_timer_ms;
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut s = PuzzleSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Centered column, bottom row one above the board.
fn spawn_origin(grid: &Grid, shape: &ShapeRef) -> Vec2i {
    Vec2i::new(
        (grid.width() - shape.width()).div_euclid(2),
        -shape.height() - 1,
    )
}
