//! Session: one game state plus the timer that drives it.
//!
//! The host loop owns a single `Session` and feeds it two kinds of events,
//! key commands and clock readings. Both run to completion on the caller's
//! thread, so tick and input mutations never interleave.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::GameConfig;
use crate::core::{GameSnapshot, GameState, TickOutcome};
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    tick_interval: Duration,
    last_tick: Instant,
    timer_running: bool,
    /// Final score waiting to be shown; set once per game over.
    pending_game_over: Option<u32>,
}

impl Session {
    /// Create a session and start its first game now.
    pub fn new(config: &GameConfig) -> Self {
        Self::started_at(config, Instant::now())
    }

    /// Create a session whose timer starts at `now`.
    pub fn started_at(config: &GameConfig, now: Instant) -> Self {
        let mut state = GameState::new(config.seed);
        state.start_game();
        info!(
            "[Session] Game started (seed={}, tick={}ms)",
            config.seed, config.tick_ms
        );
        Self {
            state,
            tick_interval: Duration::from_millis(config.tick_ms as u64),
            last_tick: now,
            timer_running: true,
            pending_game_over: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    /// Apply one input command. Returns whether the state changed.
    ///
    /// Movement is ignored after game over; only `Restart` leaves that state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.state.game_over() && action != GameAction::Restart {
            return false;
        }

        let changed = match action {
            GameAction::MoveLeft => self.state.move_piece(-1, 0),
            GameAction::MoveRight => self.state.move_piece(1, 0),
            GameAction::SoftDrop => self.state.move_piece(0, 1),
            GameAction::Rotate => self.state.rotate_piece(),
            GameAction::Restart => {
                self.restart(Instant::now());
                true
            }
        };
        debug!("[Session] {} -> {}", action.as_str(), changed);
        changed
    }

    /// Start a fresh game and restart the timer from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.state.start_game();
        self.last_tick = now;
        self.timer_running = true;
        self.pending_game_over = None;
        info!(
            "[Session] Game restarted (high score {})",
            self.state.high_score()
        );
    }

    /// Run a tick if the timer is running and a full interval has passed.
    pub fn poll_tick(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.timer_running {
            return None;
        }
        if now.saturating_duration_since(self.last_tick) < self.tick_interval {
            return None;
        }
        self.last_tick = now;

        let outcome = self.state.tick();
        match outcome {
            TickOutcome::GameOver {
                final_score,
                high_score,
            } => {
                self.timer_running = false;
                self.pending_game_over = Some(final_score);
                info!(
                    "[Session] Game over: score {} (high score {})",
                    final_score, high_score
                );
            }
            TickOutcome::Advanced {
                score,
                lines_cleared,
                ..
            } if lines_cleared > 0 => {
                debug!("[Session] Cleared {} line(s), score {}", lines_cleared, score);
            }
            _ => {}
        }
        Some(outcome)
    }

    /// Time left before the next tick is due; zero if it is overdue.
    ///
    /// Returns the full interval while the timer is stopped, so callers can
    /// use it directly as an input polling timeout.
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        if !self.timer_running {
            return self.tick_interval;
        }
        self.tick_interval
            .checked_sub(now.saturating_duration_since(self.last_tick))
            .unwrap_or(Duration::ZERO)
    }

    /// Take the end-of-game notification (final score), at most once per game.
    pub fn take_game_over(&mut self) -> Option<u32> {
        self.pending_game_over.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tick_ms: u32) -> GameConfig {
        GameConfig {
            seed: 7,
            tick_ms,
            log_path: None,
        }
    }

    #[test]
    fn tick_waits_for_full_interval() {
        let t0 = Instant::now();
        let mut session = Session::started_at(&config(500), t0);

        assert_eq!(session.poll_tick(t0 + Duration::from_millis(499)), None);
        assert!(session.poll_tick(t0 + Duration::from_millis(500)).is_some());
        // Interval restarts from the last tick.
        assert_eq!(session.poll_tick(t0 + Duration::from_millis(900)), None);
        assert!(session.poll_tick(t0 + Duration::from_millis(1000)).is_some());
    }

    #[test]
    fn time_until_tick_counts_down() {
        let t0 = Instant::now();
        let session = Session::started_at(&config(500), t0);

        assert_eq!(session.time_until_tick(t0), Duration::from_millis(500));
        assert_eq!(
            session.time_until_tick(t0 + Duration::from_millis(200)),
            Duration::from_millis(300)
        );
        assert_eq!(
            session.time_until_tick(t0 + Duration::from_secs(5)),
            Duration::ZERO
        );
    }

    #[test]
    fn soft_drop_moves_piece_down() {
        let mut session = Session::started_at(&config(500), Instant::now());
        let y = session.state().active().unwrap().y;
        assert!(session.apply_action(GameAction::SoftDrop));
        assert_eq!(session.state().active().unwrap().y, y + 1);
    }

    #[test]
    fn game_over_stops_timer_and_notifies_once() {
        let t0 = Instant::now();
        let mut session = Session::started_at(&config(1), t0);

        let mut now = t0;
        let mut game_overs = 0;
        for _ in 0..10_000 {
            now += Duration::from_millis(1);
            if let Some(TickOutcome::GameOver { .. }) = session.poll_tick(now) {
                game_overs += 1;
            }
            if !session.timer_running() {
                break;
            }
        }

        assert_eq!(game_overs, 1);
        assert!(session.state().game_over());
        assert!(session.take_game_over().is_some());
        assert_eq!(session.take_game_over(), None);
        assert_eq!(session.poll_tick(now + Duration::from_secs(1)), None);
        assert!(!session.apply_action(GameAction::MoveLeft));

        assert!(session.apply_action(GameAction::Restart));
        assert!(session.timer_running());
        assert!(!session.state().game_over());
        assert!(session.state().board().is_empty());
    }
}
