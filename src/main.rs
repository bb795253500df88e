//! Terminal falling-block runner (default binary).
//!
//! One loop owns the session: render, wait for a key until the next tick is
//! due, apply the key, then let the timer fire. Keys and ticks are therefore
//! always applied one after the other.

use std::fs::OpenOptions;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use term_tetris::core::GameSnapshot;
use term_tetris::engine::{GameConfig, Session};
use term_tetris::input::{handle_key_event, should_quit};
use term_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut config = GameConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some((score, high_score)) = result? {
        println!("Game Over! Your score is {}", score);
        println!("High Score: {}", high_score);
    }
    Ok(())
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let default_filter = if config.log_path.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

/// Run until the player quits. Returns `(score, high_score)` if the last game ended.
fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<Option<(u32, u32)>> {
    let mut session = Session::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut dirty = true;

    loop {
        if dirty {
            session.snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = session.time_until_tick(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        let state = session.state();
                        return Ok(state
                            .game_over()
                            .then(|| (state.score(), state.high_score())));
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if session.poll_tick(Instant::now()).is_some() {
            dirty = true;
        }

        if let Some(score) = session.take_game_over() {
            info!("[Main] Game Over! Your score is {}", score);
        }
    }
}
