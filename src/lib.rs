//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! Re-exports the workspace crates as `term_tetris::{core, engine, input, term, types}`
//! so the binary, integration tests and benches share one import path.

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
