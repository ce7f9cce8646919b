//! Pieces module - tetromino shapes and kick tables
//!
//! Shapes are 4 mino offsets inside a 4x4 box, indexed by kind and rotation.
//! Kick tables map a rotation transition (from, to) to the ordered list of
//! position offsets tried when rotating. Transitions without an entry fall
//! back to a single zero offset.
//!
//! Note that the declared kick lists do not start with (0, 0): a rotation
//! with an explicit entry only ever lands on one of the listed offsets.

use crate::types::{PieceKind, Rotation, SPAWN_POSITION};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Ordered kick candidates for one rotation transition.
pub type KickList = &'static [MinoOffset];

/// Shape table indexed by `[kind.index()][rotation.index()]`.
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

/// Get the shape (mino offsets) for a piece kind and rotation
#[inline]
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Which kick table a piece kind rotates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickClass {
    /// The I piece has its own table.
    I,
    /// J, L, S, T, Z share one table.
    Default,
    /// O looks the same in every state and has no entries.
    Symmetric,
}

pub fn kick_class(kind: PieceKind) -> KickClass {
    match kind {
        PieceKind::I => KickClass::I,
        PieceKind::O => KickClass::Symmetric,
        _ => KickClass::Default,
    }
}

/// Kick table indexed by `[from.index()][to.index()]`; empty = no entry.
type KickTable = [[KickList; 4]; 4];

const NONE: KickList = &[];

const DEFAULT_KICKS: KickTable = [
    // from 0
    [NONE, &[(-1, 0), (-1, 1), (0, -2), (-1, -2)], NONE, &[(1, 0), (1, 1), (0, -2), (1, -2)]],
    // from 1
    [&[(1, 0), (1, -1), (0, 2), (1, 2)], NONE, &[(1, 0), (1, -1), (0, 2), (1, 2)], NONE],
    // from 2
    [NONE, &[(-1, 0), (-1, 1), (0, -2), (-1, -2)], NONE, &[(1, 0), (1, 1), (0, -2), (1, -2)]],
    // from 3
    [&[(-1, 0), (-1, -1), (0, 2), (-1, 2)], NONE, &[(-1, 0), (-1, -1), (0, 2), (-1, 2)], NONE],
];

const I_KICKS: KickTable = [
    // from 0
    [NONE, &[(-2, 0), (1, 0), (-2, -1), (1, 2)], NONE, &[(-1, 0), (2, 0), (-1, 2), (2, -1)]],
    // from 1
    [&[(2, 0), (-1, 0), (2, 1), (-1, -2)], NONE, &[(-1, 0), (2, 0), (-1, 2), (2, -1)], NONE],
    // from 2
    [NONE, &[(1, 0), (-2, 0), (1, -2), (-2, 1)], NONE, &[(2, 0), (-1, 0), (2, 1), (-1, -2)]],
    // from 3
    [&[(1, 0), (-2, 0), (1, -2), (-2, 1)], NONE, &[(-2, 0), (1, 0), (-2, -1), (1, 2)], NONE],
];

/// Used whenever a transition has no table entry.
const ZERO_KICK: KickList = &[(0, 0)];

/// Ordered kick candidates for rotating `kind` from `from` to `to`.
pub fn kick_offsets(kind: PieceKind, from: Rotation, to: Rotation) -> KickList {
    let list = match kick_class(kind) {
        KickClass::I => I_KICKS[from.index()][to.index()],
        KickClass::Default => DEFAULT_KICKS[from.index()][to.index()],
        KickClass::Symmetric => NONE,
    };
    if list.is_empty() {
        ZERO_KICK
    } else {
        list
    }
}

/// A piece in play: kind, reference position and rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece at the spawn position, rotation North.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the 4 occupied cells.
    pub fn cells(&self) -> PieceShape {
        self.cells_at(0, 0, 0)
    }

    /// Absolute cells after shifting by (dx, dy) and turning by `drot` quarter turns.
    pub fn cells_at(&self, dx: i8, dy: i8, drot: i8) -> PieceShape {
        let shape = get_shape(self.kind, self.rotation.step(drot));
        shape.map(|(mx, my)| (self.x + mx + dx, self.y + my + dy))
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Try to rotate a piece one quarter turn (`dir` = +1 clockwise, -1 counter-clockwise).
///
/// Candidates from the kick table are tried in declared order; the first one
/// for which `collides` is false wins. Returns the rotated piece and the
/// applied offset, or `None` when every candidate collides.
pub fn try_rotate(
    piece: &Piece,
    dir: i8,
    collides: impl Fn(&Piece) -> bool,
) -> Option<(Piece, MinoOffset)> {
    let to = piece.rotation.step(dir.signum());
    let turned = Piece {
        rotation: to,
        ..*piece
    };

    kick_offsets(piece.kind, piece.rotation, to)
        .iter()
        .map(|&(kx, ky)| (turned.shifted(kx, ky), (kx, ky)))
        .find(|(candidate, _)| !collides(candidate))
}
