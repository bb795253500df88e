//! Session tests: key events and clock readings driving one game.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use term_tetris::core::TickOutcome;
use term_tetris::engine::{GameConfig, Session};
use term_tetris::input::handle_key_event;
use term_tetris::types::{GameAction, SPAWN_X};

fn config() -> GameConfig {
    GameConfig {
        seed: 12345,
        tick_ms: 500,
        log_path: None,
    }
}

fn press(session: &mut Session, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => session.apply_action(action),
        None => false,
    }
}

#[test]
fn arrow_keys_drive_the_active_piece() {
    let mut session = Session::started_at(&config(), Instant::now());
    let start = session.state().active().unwrap();
    assert_eq!(start.x, SPAWN_X);

    assert!(press(&mut session, KeyCode::Left));
    assert_eq!(session.state().active().unwrap().x, SPAWN_X - 1);

    assert!(press(&mut session, KeyCode::Down));
    assert_eq!(session.state().active().unwrap().y, start.y + 1);

    assert!(!press(&mut session, KeyCode::Char('x')));
}

#[test]
fn input_and_ticks_interleave_on_one_state() {
    let t0 = Instant::now();
    let mut session = Session::started_at(&config(), t0);
    let y0 = session.state().active().unwrap().y;

    session.apply_action(GameAction::SoftDrop);
    let outcome = session.poll_tick(t0 + Duration::from_millis(500));

    assert!(matches!(outcome, Some(TickOutcome::Advanced { locked: false, .. })));
    assert_eq!(session.state().active().unwrap().y, y0 + 2);
}

#[test]
fn restart_after_game_over_restarts_timer_and_keeps_high_score() {
    let t0 = Instant::now();
    let mut session = Session::started_at(&config(), t0);

    let mut now = t0;
    while session.timer_running() {
        now += Duration::from_millis(500);
        session.poll_tick(now);
    }
    let final_score = session.take_game_over().unwrap();
    assert_eq!(final_score, session.state().score());
    let high = session.state().high_score();

    assert!(press(&mut session, KeyCode::Char('r')));

    assert!(session.timer_running());
    assert_eq!(session.state().score(), 0);
    assert_eq!(session.state().high_score(), high);
    assert_eq!(session.take_game_over(), None);
}
