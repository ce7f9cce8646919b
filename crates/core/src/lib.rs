//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block game and nothing else.
//! It has **no dependencies** on terminals, input devices or I/O, making it:
//!
//! - **Deterministic**: the randomizer is injected, so a seed replays a run
//! - **Testable**: every rule is exercised without a presentation surface
//! - **Portable**: any host scheduler can drive it (real-time loop, test harness, frame stepper)
//! - **Allocation-free**: ticks, actions and snapshots never touch the heap
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision, merge and line sweep
//! - [`pieces`]: shape and kick tables, rotation with kicks
//! - [`rng`]: injectable randomness and the 7-bag lookahead queue
//! - [`scoring`]: line/drop points, levels, gravity speed
//! - [`repeat`]: DAS/ARR auto-shift for held lateral keys
//! - [`clock`]: host timestamps to elapsed deltas
//! - [`game_state`]: the controller owning a run
//! - [`snapshot`]: read-only projection for renderers
//!
//! # Rules
//!
//! - **7-bag**: each bag is a shuffled permutation of the 7 kinds
//! - **Kicks**: listed offsets are tried in order; there is no implicit
//!   in-place attempt for transitions that have a table entry
//! - **Lock**: a piece locks as soon as gravity cannot move it, or on hard drop
//! - **Hold**: once per spawn
//! - **Scoring**: 100/300/500/800 times level for 1-4 lines, 1 point per
//!   soft-drop step, 2 points per hard-drop row
//!
//! # Example
//!
//! ```
//! use stackfall_core::GameState;
//! use stackfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop awards points
//! assert!(game.score() > 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) with elapsed
//! milliseconds, or [`GameState::advance_to`](game_state::GameState::advance_to)
//! with a monotonic timestamp. Gravity starts at 1000ms per row and speeds up
//! by 70ms per level down to 80ms.

pub mod board;
pub mod clock;
pub mod game_state;
pub mod pieces;
pub mod repeat;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::FrameClock;
pub use game_state::GameState;
pub use pieces::{get_shape, kick_offsets, try_rotate, Piece};
pub use repeat::{AutoShift, RepeatConfig};
pub use rng::{new_bag, PieceQueue, PieceRng, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_line_score, get_drop_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
