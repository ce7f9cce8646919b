//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into the engine's vocabulary: edge-triggered
//! [`GameAction`](crate::types::GameAction)s plus press/release signals for
//! lateral movement. Repeat timing (DAS/ARR) lives in the engine; this crate
//! only decides when a lateral key is down, including on terminals that never
//! report key releases.

pub mod handler;
pub mod map;

pub use stackfall_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, shift_direction, should_quit, InputEvent};
