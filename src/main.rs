//! Terminal polyomino runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_polyomino::cli::Args;
use tui_polyomino::core::PuzzleSnapshot;
use tui_polyomino::engine::Session;
use tui_polyomino::input::{handle_key_event, should_quit, HeldKeys};
use tui_polyomino::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_polyomino::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve()?;
    let mut session = Session::new(config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    let stats = session.stats();
    eprintln!(
        "[tui-polyomino] games={} pieces={} rows={} best_score={} pack={}",
        stats.games,
        stats.pieces_locked,
        stats.rows_cleared,
        stats.best_score,
        session.config().pack.as_str()
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut held = HeldKeys::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = PuzzleSnapshot::default();
    let mut queued: Vec<GameAction> = Vec::with_capacity(16);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.puzzle().snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = held.handle_key_press(key.code) {
                            queued.push(action);
                        } else if key.kind == KeyEventKind::Press {
                            // Directional keys are owned by `held`.
                            if let Some(action) = handle_key_event(key).filter(|a| a.direction().is_none()) {
                                queued.push(action);
                            }
                        }
                    }
                    KeyEventKind::Release => held.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            held.update(TICK_MS);
            session.frame(TICK_MS, &queued, held.held());
            queued.clear();
        }
    }
}
