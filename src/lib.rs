//! Stackfall (workspace facade crate).
//!
//! Re-exports the engine and host crates under one name and holds the pieces
//! of the terminal binary worth testing on their own: argument parsing and the
//! play session.

pub mod config;
pub mod session;

pub use stackfall_core as core;
pub use stackfall_input as input;
pub use stackfall_term as term;
pub use stackfall_types as types;
