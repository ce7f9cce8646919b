//! Terminal "game renderer" crate.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is diffed and flushed to
//! the terminal.
//!
//! The only input is a [`GameSnapshot`](crate::core::GameSnapshot): the view
//! never sees or mutates the controller.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use stackfall_core as core;
pub use stackfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
