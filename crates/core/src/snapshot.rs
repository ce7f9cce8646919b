use serde::Serialize;

use crate::pieces::{Piece, PieceShape};
use crate::types::{GamePhase, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute board cells; rows above the board have negative y.
    pub cells: PieceShape,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Read-only projection of the controller for renderers.
///
/// Plain `Copy` data: hosts may keep one around and refill it with
/// `GameState::snapshot_into` every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    /// Piece tags per cell (`PieceKind::tag`), 0 = empty.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub ghost_cells: Option<PieceShape>,
    pub hold: Option<PieceKind>,
    pub next_queue: [Option<PieceKind>; PREVIEW_LEN],
    pub can_hold: bool,
    pub phase: GamePhase,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Tag at (x, y), or 0 when out of range.
    pub fn cell(&self, x: i8, y: i8) -> u8 {
        if x < 0 || y < 0 {
            return 0;
        }
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(0)
    }
}
