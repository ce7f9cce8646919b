//! Shared vocabulary for the falling-block engine.
//!
//! Everything here is plain data: piece kinds, rotation states, the discrete
//! action vocabulary hosts translate their input into, and the rule constants.
//! The core engine, input mapping and renderers all depend on this crate and on
//! nothing of each other.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (3, 0), rotation North
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Recommended host tick (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 70 | Gravity speed-up per level |
//! | `DROP_INTERVAL_MIN_MS` | 80 | Gravity floor |
//! | `DEFAULT_DAS_MS` | 170 | Delay before lateral auto-repeat starts |
//! | `DEFAULT_ARR_MS` | 40 | Interval between lateral auto-repeats |
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn reference position (x, y) for every new active piece.
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Recommended host tick in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1.
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level above 1.
pub const DROP_STEP_MS: u32 = 70;

/// Gravity never gets faster than this.
pub const DROP_INTERVAL_MIN_MS: u32 = 80;

/// Cleared lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// DAS (Delayed Auto Shift) delay in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 170;

/// ARR (Auto Repeat Rate) in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 40;

/// Lookahead depth the queue keeps internally.
pub const QUEUE_DEPTH: usize = 5;

/// Number of queued pieces exposed to presentation.
pub const PREVIEW_LEN: usize = 3;

/// Points per row of a manual soft-drop step.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row traveled by a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear scoring table, indexed by simultaneous lines cleared.
///
/// Points are multiplied by the current level (1-based).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
///
/// - **I**: straight bar
/// - **O**: 2x2 square (fully symmetric, no kicks)
/// - **T**, **S**, **Z**, **J**, **L**: share the default kick table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order; a fresh bag starts from this order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use stackfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase single-letter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Index into per-kind tables (0..7).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Non-zero grid tag used in snapshots; 0 means empty.
    #[inline]
    pub fn tag(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1..=7 => Some(Self::ALL[(tag - 1) as usize]),
            _ => None,
        }
    }
}

/// Rotation states, numbered 0..4 clockwise from the spawn orientation.
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        self.step(1)
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        self.step(-1)
    }

    /// Advance by `delta` quarter turns, wrapping modulo 4.
    pub fn step(&self, delta: i8) -> Self {
        let idx = (self.index() as i8 + delta).rem_euclid(4);
        Self::from_index(idx as usize)
    }

    /// Rotation state number (North = 0 .. West = 3).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Rotation::index`]; wraps modulo 4.
    pub fn from_index(idx: usize) -> Self {
        match idx % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Discrete, edge-triggered actions accepted by the controller.
///
/// Hosts translate keys, touches or scripted input into these. Continuous
/// lateral movement uses [`ShiftDirection`] press/release signals instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Single manual step down (+1 point when it succeeds)
    SoftDrop,
    /// Drop to the resting row and lock immediately
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Hold current piece (once per spawn)
    Hold,
    /// Toggle pause state
    Pause,
    /// Start a fresh run
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive).
    ///
    /// Unrecognized names yield `None`; hosts drop them silently.
    ///
    /// ```
    /// use stackfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateCcw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("HOLD"), Some(GameAction::Hold));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Direction of a held lateral-movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    Left,
    Right,
}

impl ShiftDirection {
    /// Horizontal step for one move in this direction.
    #[inline]
    pub fn dx(self) -> i8 {
        match self {
            ShiftDirection::Left => -1,
            ShiftDirection::Right => 1,
        }
    }

    pub fn action(self) -> GameAction {
        match self {
            ShiftDirection::Left => GameAction::MoveLeft,
            ShiftDirection::Right => GameAction::MoveRight,
        }
    }
}

/// Controller lifecycle.
///
/// `Idle` → `Playing` ⇄ `Paused`, `Playing` → `GameOver`; restart re-enters `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GamePhase {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// Record of the most recent lock, for observers (scoreboards, logs, replays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the cleared lines (0 when none).
    pub line_clear_score: u32,
    /// Hard-drop points awarded just before this lock.
    pub drop_score: u32,
    /// Level after the lock was processed.
    pub level: u32,
    /// True when the spawn after this lock collided.
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;
