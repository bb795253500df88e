//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole falling-block engine: board, shapes, rotation,
//! locking, line clears and scoring. It has **zero dependencies** on UI,
//! timers or I/O; a host drives it by calling [`GameState::tick`] on a fixed
//! interval and forwarding input as [`GameState::move_piece`] /
//! [`GameState::rotate_piece`] calls.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 occupancy grid with bounds-checked access and line clearing
//! - [`game_state`]: active piece, score, high score, game-over flag, tick
//! - [`pieces`]: the seven shapes and the `(x, y) -> (y, -x)` rotation
//! - [`rng`]: seeded LCG for uniform piece selection
//! - [`snapshot`]: copyable view of the state for renderers
//!
//! # Game Rules
//!
//! - A piece falls one row per tick; when it cannot, it locks in place
//! - Each full row is removed and scores one point
//! - Rotation has no wall kicks; a blocked rotation is ignored
//! - The game ends when a freshly spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{GameState, TickOutcome};
//!
//! let mut game = GameState::new(12345);
//! game.start_game();
//!
//! game.move_piece(-1, 0);
//! game.rotate_piece();
//!
//! match game.tick() {
//!     TickOutcome::Advanced { score, .. } => assert_eq!(score, 0),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use term_tetris_types as types;

pub use board::{Board, ClearedRows};
pub use game_state::{GameState, Tetromino, TickOutcome};
pub use pieces::{get_shape, rotate_shape, try_rotate, PieceShape};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
