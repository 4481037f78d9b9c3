use tui_polyomino_core::{GameConfig, LockEvent, Puzzle, Vec2i};
use tui_polyomino_types::{Direction, GameAction};

/// What one call to [`Session::frame`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Discrete actions that changed the puzzle
    pub applied: u32,
    /// The held direction produced a move
    pub held_moved: bool,
    /// Gravity ran this frame
    pub gravity_ticked: bool,
    pub pieces_locked: u32,
    pub rows_cleared: u32,
    /// A lock ended the game during this frame
    pub game_over: bool,
}

impl FrameReport {
    fn record(&mut self, event: LockEvent) {
        if event.game_over {
            self.game_over = true;
        } else {
            self.pieces_locked += 1;
            self.rows_cleared += event.rows_cleared;
        }
    }
}

/// Running totals across restarts, for the exit summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub games: u32,
    pub pieces_locked: u32,
    pub rows_cleared: u32,
    pub best_score: u32,
}

/// One puzzle plus the timers that drive it
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    config: GameConfig,
    move_timer_ms: u32,
    drop_timer_ms: u32,
    stats: SessionStats,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            puzzle: Puzzle::new(&config),
            config,
            move_timer_ms: 0,
            drop_timer_ms: 0,
            stats: SessionStats {
                games: 1,
                ..SessionStats::default()
            },
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn puzzle_mut(&mut self) -> &mut Puzzle {
        &mut self.puzzle
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stats(&self) -> SessionStats {
        let mut stats = self.stats;
        stats.best_score = stats.best_score.max(self.puzzle.score());
        stats
    }

    /// Apply a new configuration and start a fresh game on it.
    pub fn reload(&mut self, config: GameConfig) {
        self.note_game_end();
        self.config = config;
        self.puzzle.reload(&self.config);
        self.move_timer_ms = 0;
        self.drop_timer_ms = 0;
    }

    fn note_game_end(&mut self) {
        self.stats.best_score = self.stats.best_score.max(self.puzzle.score());
        self.stats.games += 1;
    }

    /// Apply one discrete action. Returns whether the puzzle accepted it.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.puzzle.is_over() && !action.allowed_after_game_over() {
            return false;
        }

        match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop => {
                let delta = action.direction().map(Direction::delta).unwrap_or((0, 0));
                self.puzzle.move_by(Vec2i::from(delta))
            }
            GameAction::RotateCw | GameAction::RotateCcw | GameAction::Rotate180 => {
                let delta_rot = action.rotation_delta().unwrap_or(0);
                self.puzzle.rotate(delta_rot)
            }
            GameAction::HardDrop => self.puzzle.lock().is_some(),
            GameAction::Store => self.puzzle.store(),
            GameAction::Restart => {
                self.note_game_end();
                self.puzzle.reset();
                self.drop_timer_ms = 0;
                true
            }
            GameAction::CyclePack => {
                let config = self.config.with_pack(self.config.pack.cycle());
                self.reload(config);
                true
            }
        }
    }

    /// Advance one frame.
    ///
    /// Queued actions run first, in order. The held direction then repeats
    /// every `move_interval_ms`, and gravity runs every `drop_interval_ms`
    /// with the accumulated time also burning the lock timer.
    pub fn frame(
        &mut self,
        elapsed_ms: u32,
        actions: &[GameAction],
        held: Option<Direction>,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        for &action in actions {
            if self.apply_action(action) {
                report.applied += 1;
            }
            if let Some(event) = self.puzzle.take_last_event() {
                report.record(event);
            }
        }

        match held {
            Some(direction) if !self.puzzle.is_over() => {
                self.move_timer_ms = self.move_timer_ms.saturating_add(elapsed_ms);
                if self.move_timer_ms >= self.config.move_interval_ms {
                    self.move_timer_ms = 0;
                    report.held_moved = self.puzzle.move_by(Vec2i::from(direction.delta()));
                }
            }
            _ => self.move_timer_ms = 0,
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms >= self.config.drop_interval_ms {
            let sample = self.drop_timer_ms;
            self.drop_timer_ms = 0;
            report.gravity_ticked = !self.puzzle.is_over();
            if let Some(event) = self.puzzle.gravity_step(sample) {
                report.record(event);
            }
            self.puzzle.take_last_event();
        }

        self.stats.pieces_locked += report.pieces_locked;
        self.stats.rows_cleared += report.rows_cleared;
        report
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
