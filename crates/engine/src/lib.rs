//! Host-side game loop plumbing.
//!
//! [`Session`] plays the timer source and command queue around a
//! [`core::GameState`]; [`GameConfig`] collects the runtime knobs from the
//! environment and the command line. Nothing here touches the terminal.

pub mod config;
pub mod session;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use config::GameConfig;
pub use session::Session;
