//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay: a [`GameView`] turns a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and a [`TerminalRenderer`]
//! writes framebuffers to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the per-frame path allocation-free once buffers are warm
//! - 2 chars wide per board cell to offset the terminal glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
