//! Game state module - the controller that owns a run
//!
//! Ties together board, pieces, randomizer, scoring and auto-shift. Every
//! mutation goes through `GameState`; the other modules only compute.
//!
//! Failures are never errors: a blocked move or rotation returns `false`, a
//! colliding spawn moves the run to `GameOver`.

use crate::board::Board;
use crate::clock::FrameClock;
use crate::pieces::{try_rotate, Piece, PieceShape};
use crate::repeat::{AutoShift, RepeatConfig};
use crate::rng::{PieceQueue, PieceRng, SimpleRng};
use crate::scoring::{
    calculate_drop_score, calculate_line_score, get_drop_interval_ms, level_for_lines,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GamePhase, LockEvent, PieceKind, ShiftDirection, QUEUE_DEPTH};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Option<Piece>,
    hold: Option<PieceKind>,
    /// Set by a hold; cleared by the next natural spawn.
    hold_used: bool,
    queue: PieceQueue<R>,
    phase: GamePhase,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    auto_shift: AutoShift,
    clock: FrameClock,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Increments on every successful spawn; hold swaps keep it.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: PieceRng> GameState<R> {
    /// Create a new idle game drawing pieces from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            active: None,
            hold: None,
            hold_used: false,
            queue: PieceQueue::with_rng(rng),
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: get_drop_interval_ms(1),
            drop_timer_ms: 0,
            auto_shift: AutoShift::new(),
            clock: FrameClock::new(),
            episode_id: 0,
            piece_id: 0,
            last_event: None,
        }
    }

    /// Replace the DAS/ARR timing.
    pub fn with_repeat_config(mut self, config: RepeatConfig) -> Self {
        self.auto_shift = AutoShift::with_config(config);
        self
    }

    /// Reset board, run state, queue and hold, spawn the first piece and start playing.
    pub fn start(&mut self) {
        self.board.clear();
        self.queue.reset();
        self.active = None;
        self.hold = None;
        self.hold_used = false;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = get_drop_interval_ms(self.level);
        self.drop_timer_ms = 0;
        self.auto_shift.reset();
        self.clock.resync();
        self.piece_id = 0;
        self.last_event = None;

        self.phase = GamePhase::Playing;
        self.spawn_piece();
    }

    /// Begin a new episode. The randomizer keeps its state.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn can_hold(&self) -> bool {
        !self.hold_used
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    /// Upcoming pieces, head first.
    pub fn next_queue(&self) -> &[PieceKind] {
        self.queue.preview()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn held_direction(&self) -> Option<ShiftDirection> {
        self.auto_shift.held()
    }

    pub fn repeat_config(&self) -> RepeatConfig {
        self.auto_shift.config()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.ghost_cells = self.ghost_cells();
        out.hold = self.hold;
        out.next_queue = Default::default();
        for (slot, kind) in out.next_queue.iter_mut().zip(self.queue.preview()) {
            *slot = Some(*kind);
        }
        out.can_hold = !self.hold_used;
        out.phase = self.phase;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn the next queued piece. Returns false (and ends the run) when it collides.
    pub fn spawn_piece(&mut self) -> bool {
        self.queue.ensure(QUEUE_DEPTH);
        let Some(kind) = self.queue.dequeue_next() else {
            return false;
        };
        if !self.place_active(kind) {
            return false;
        }
        self.piece_id = self.piece_id.wrapping_add(1);
        self.hold_used = false;
        self.queue.ensure(QUEUE_DEPTH);
        true
    }

    /// Put a fresh `kind` at the spawn position, or end the run if it doesn't fit.
    fn place_active(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::spawn(kind);
        if self.board.collides(&piece, 0, 0, 0) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            self.auto_shift.reset();
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.board.collides(&active, dx, dy, 0) {
            return false;
        }
        self.active = Some(active.shifted(dx, dy));
        true
    }

    /// Manual single step down; +1 point when it moves.
    pub fn soft_drop_step(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.score = self.score.saturating_add(calculate_drop_score(1, false));
        }
        moved
    }

    /// Rotate one quarter turn (`dir` = +1 clockwise, -1 counter-clockwise).
    pub fn rotate(&mut self, dir: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let board = &self.board;
        match try_rotate(&active, dir, |candidate| board.collides(candidate, 0, 0, 0)) {
            Some((rotated, _kick)) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Drop to the resting row and lock. Returns the rows traveled.
    pub fn hard_drop(&mut self) -> u32 {
        let Some(mut active) = self.active else {
            return 0;
        };

        let distance = self.drop_distance(&active);
        active.y += distance as i8;
        self.active = Some(active);

        let drop_score = calculate_drop_score(distance, true);
        self.score = self.score.saturating_add(drop_score);
        self.lock_with_drop_score(drop_score);
        distance
    }

    /// Swap active piece with hold piece
    pub fn hold(&mut self) -> bool {
        if self.hold_used {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.hold.replace(active.kind) {
            Some(held) => {
                // A blocked swap ends the run like a blocked spawn.
                self.place_active(held);
            }
            None => {
                self.active = None;
                self.spawn_piece();
            }
        }
        self.hold_used = true;
        true
    }

    /// Lock the active piece onto the board, clear lines and spawn the next piece.
    pub fn lock_piece(&mut self) {
        self.lock_with_drop_score(0);
    }

    fn lock_with_drop_score(&mut self, drop_score: u32) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active);
        let lines_cleared = self.board.sweep_full_lines();

        // Awarded at the level in effect before these lines count.
        let line_clear_score = calculate_line_score(lines_cleared, self.level);
        self.score = self.score.saturating_add(line_clear_score);
        if lines_cleared > 0 {
            self.lines = self.lines.saturating_add(lines_cleared as u32);
            self.level = level_for_lines(self.lines);
            self.drop_interval_ms = get_drop_interval_ms(self.level);
        }

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            line_clear_score,
            drop_score,
            level: self.level,
            game_over: self.game_over(),
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    fn drop_distance(&self, piece: &Piece) -> u32 {
        let mut distance: i8 = 0;
        while !self.board.collides(piece, 0, distance + 1, 0) {
            distance += 1;
        }
        distance as u32
    }

    /// Calculate the ghost piece Y position (where piece would land)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + self.drop_distance(&active) as i8)
    }

    /// Cells the active piece would occupy at its resting row.
    pub fn ghost_cells(&self) -> Option<PieceShape> {
        let active = self.active?;
        Some(active.cells_at(0, self.drop_distance(&active) as i8, 0))
    }

    /// Advance auto-shift and gravity by `elapsed_ms`. No-op unless playing.
    ///
    /// Returns true when the active piece moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        let mut changed = false;
        for dir in self.auto_shift.update(elapsed_ms) {
            changed |= self.try_move(dir.dx(), 0);
        }

        if self.active.is_none() {
            return changed;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            if !self.try_move(0, 1) {
                self.lock_piece();
            }
            changed = true;
        }

        changed
    }

    /// Tick by the time elapsed since the previous call (host timestamp in ms).
    pub fn advance_to(&mut self, now_ms: u64) -> bool {
        let elapsed = self.clock.advance(now_ms);
        self.tick(elapsed)
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.phase = GamePhase::Paused;
        true
    }

    /// Resume play; the time spent paused is not charged to gravity.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Playing;
        self.clock.resync();
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// A lateral key went down. Moves once right away on a new activation.
    pub fn press_shift(&mut self, dir: ShiftDirection) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        if self.auto_shift.press(dir) {
            return self.try_move(dir.dx(), 0);
        }
        false
    }

    /// A lateral key went up. Recorded in every phase.
    pub fn release_shift(&mut self, dir: ShiftDirection) {
        self.auto_shift.release(dir);
    }

    /// Apply a game action
    ///
    /// Actions that do not apply in the current phase are ignored and return false.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (GamePhase::Idle, GameAction::Restart) => {
                self.start();
                true
            }
            (GamePhase::Paused | GamePhase::GameOver, GameAction::Restart) => {
                self.restart();
                true
            }
            (GamePhase::Paused, GameAction::Pause) => self.resume(),
            (GamePhase::Playing, action) => match action {
                GameAction::MoveLeft => self.try_move(-1, 0),
                GameAction::MoveRight => self.try_move(1, 0),
                GameAction::SoftDrop => self.soft_drop_step(),
                GameAction::HardDrop => {
                    self.hard_drop();
                    true
                }
                GameAction::RotateCw => self.rotate(1),
                GameAction::RotateCcw => self.rotate(-1),
                GameAction::Hold => self.hold(),
                GameAction::Pause => self.pause(),
                GameAction::Restart => {
                    self.restart();
                    true
                }
            },
            _ => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
