//! Property tests: invariants that must hold after any sequence of actions.
//!
//! - The grid only ever stores Empty and Locked cells.
//! - The active footprint stays inside the columns, above the floor, and off
//!   locked cells.
//! - No full row survives an action.
//! - Score moves in whole rows and only resets on Restart/CyclePack.
//! - A rejected action changes nothing observable.
//! - Rotation applies the first kick offset that fits.

use proptest::prelude::*;
use tui_polyomino::core::{GameConfig, Puzzle, ShapePack, Vec2i, ROTATION_OFFSETS};
use tui_polyomino::engine::Session;
use tui_polyomino::types::{CellState, Direction, GameAction};

const ACTIONS: [GameAction; 10] = [
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

fn assert_puzzle_invariants(puzzle: &Puzzle) {
    let grid = puzzle.grid();
    assert!(grid.cells().iter().all(|c| c.state != CellState::Moving));

    for y in 0..grid.height() as usize {
        assert!(!grid.is_row_full(y), "full row {y} left behind");
    }

    let piece = puzzle.piece();
    assert!(piece.rotation < 4);
    if !puzzle.is_over() {
        for c in piece.footprint() {
            assert!(c.x >= 0 && c.x < grid.width(), "column {} out of range", c.x);
            assert!(c.y < grid.height(), "row {} below floor", c.y);
            assert!(!grid.is_locked(c.x, c.y), "overlap at ({}, {})", c.x, c.y);
        }
    }

    assert_eq!(puzzle.score() % grid.width() as u32, 0);
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    (0..ACTIONS.len()).prop_map(|i| ACTIONS[i])
}

fn held_strategy() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Left)),
        Just(Some(Direction::Right)),
        Just(Some(Direction::Down)),
    ]
}

proptest! {
    #[test]
    fn generated_sessions_respect_invariants(
        width in 4u16..14,
        height in 4u16..24,
        pentomino in any::<bool>(),
        frames in prop::collection::vec(
            (prop::collection::vec(action_strategy(), 0..3), held_strategy(), 1u32..120),
            1..120,
        ),
    ) {
        let pack = if pentomino { ShapePack::Pentomino } else { ShapePack::Tetromino };
        let config = GameConfig {
            lock_delay_ms: 200,
            ..GameConfig::default().with_size(width, height).with_pack(pack)
        };
        let mut session = Session::new(config);
        assert_puzzle_invariants(session.puzzle());

        for (actions, held, elapsed) in frames {
            let resets = actions
                .iter()
                .any(|a| matches!(a, GameAction::Restart | GameAction::CyclePack));
            let score_before = session.puzzle().score();

            session.frame(elapsed, &actions, held);
            assert_puzzle_invariants(session.puzzle());

            if !resets {
                prop_assert!(session.puzzle().score() >= score_before);
            }
        }
    }

    #[test]
    fn rejected_actions_change_nothing(
        actions in prop::collection::vec(action_strategy(), 1..60),
    ) {
        let mut session = Session::new(GameConfig::default().with_size(6, 10));
        for action in actions {
            let before = session.puzzle().snapshot();
            let grid_before = session.puzzle().grid().clone();
            if !session.apply_action(action) {
                prop_assert_eq!(session.puzzle().snapshot(), before);
                prop_assert_eq!(session.puzzle().grid(), &grid_before);
            }
            assert_puzzle_invariants(session.puzzle());
        }
    }

    #[test]
    fn game_over_only_yields_to_restart(
        actions in prop::collection::vec(action_strategy(), 1..40),
    ) {
        let mut session = Session::new(GameConfig::default().with_size(4, 2));
        while !session.puzzle().is_over() {
            session.apply_action(GameAction::HardDrop);
        }
        for action in actions {
            let was_over = session.puzzle().is_over();
            let applied = session.apply_action(action);
            if was_over {
                prop_assert_eq!(applied, action.allowed_after_game_over());
            }
        }
    }

    #[test]
    fn rotation_applies_first_fitting_kick(
        shifts in prop::collection::vec((-1i32..=1, 0i32..=2), 0..30),
        turns in prop::collection::vec(prop_oneof![Just(1i32), Just(-1), Just(2)], 1..20),
        index in 0usize..7,
    ) {
        let mut puzzle = Puzzle::new(&GameConfig::default().with_size(6, 8));
        let shape = puzzle.catalog()[index].clone();
        puzzle.spawn(shape);
        for (dx, dy) in shifts {
            puzzle.move_by(Vec2i::new(dx, dy));
        }

        for delta_rot in turns {
            let origin = puzzle.piece().origin;
            let rotation = puzzle.piece().rotation as i32;
            let expected = ROTATION_OFFSETS
                .iter()
                .copied()
                .find(|&o| puzzle.check_move(o, delta_rot));

            let rotated = puzzle.rotate(delta_rot);
            prop_assert_eq!(rotated, expected.is_some());
            match expected {
                Some(offset) => {
                    prop_assert_eq!(puzzle.piece().origin, origin + offset);
                    prop_assert_eq!(puzzle.piece().rotation as i32, (rotation + delta_rot).rem_euclid(4));
                    prop_assert!(puzzle.check_move(Vec2i::ZERO, 0));
                }
                None => {
                    prop_assert_eq!(puzzle.piece().origin, origin);
                    prop_assert_eq!(puzzle.piece().rotation as i32, rotation);
                }
            }
        }
    }
}
