//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press is one discrete command; there is no auto-repeat handling.

pub mod map;

pub use term_tetris_types as types;

pub use map::{handle_key_event, should_quit};
