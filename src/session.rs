//! A hosted play session: one controller plus the tallies the host reports.
//!
//! The terminal binary feeds [`InputEvent`]s and timestamps in; the session
//! routes them to the controller and drains its lock events into [`RunStats`].

use crate::core::{GameSnapshot, GameState, PieceRng, RepeatConfig, SimpleRng};
use crate::input::InputEvent;
use crate::types::{GamePhase, LockEvent, ShiftDirection};

/// Totals across every episode of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub pieces_locked: u32,
    pub lines_cleared: u32,
    /// Locks that cleared four lines at once.
    pub four_line_clears: u32,
    pub games_over: u32,
    pub best_score: u32,
}

impl RunStats {
    /// Tally one lock. Runs that end are counted by the session from the
    /// phase change, since a blocked hold ends a run without a lock.
    pub fn record(&mut self, event: &LockEvent) {
        self.pieces_locked += 1;
        self.lines_cleared += event.lines_cleared;
        if event.lines_cleared == 4 {
            self.four_line_clears += 1;
        }
    }
}

pub struct Session<R = SimpleRng> {
    game: GameState<R>,
    seed: u32,
    stats: RunStats,
    /// Phase and episode seen after the previous event.
    phase: GamePhase,
    episode: u32,
    /// Lateral key the host reports as down, whether or not the game took it.
    key_down: Option<ShiftDirection>,
}

impl Session<SimpleRng> {
    /// New session with the first run already started.
    pub fn new(seed: u32, repeat: RepeatConfig) -> Self {
        Self::with_game(GameState::new(seed).with_repeat_config(repeat), seed)
    }
}

impl<R: PieceRng> Session<R> {
    pub fn with_game(mut game: GameState<R>, seed: u32) -> Self {
        game.start();
        Self {
            phase: game.phase(),
            episode: game.episode_id(),
            game,
            seed,
            stats: RunStats::default(),
            key_down: None,
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Action(action) => {
                self.game.apply_action(action);
            }
            InputEvent::ShiftPressed(dir) => {
                self.key_down = Some(dir);
                self.game.press_shift(dir);
            }
            InputEvent::ShiftReleased(dir) => {
                if self.key_down == Some(dir) {
                    self.key_down = None;
                }
                self.game.release_shift(dir);
            }
        }
        self.drain_events();
    }

    /// Advance gravity and auto-shift to the host timestamp `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.game.advance_to(now_ms);
        self.drain_events();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    fn drain_events(&mut self) {
        if let Some(event) = self.game.take_last_event() {
            self.stats.record(&event);
        }
        self.stats.best_score = self.stats.best_score.max(self.game.score());

        let phase = self.game.phase();
        let episode = self.game.episode_id();
        if (phase, episode) == (self.phase, self.episode) {
            return;
        }
        self.phase = phase;
        self.episode = episode;
        match phase {
            GamePhase::GameOver => self.stats.games_over += 1,
            // Resume and restart drop the engine's held key. The host key
            // is still down, so hand it back as a fresh press.
            GamePhase::Playing => {
                if let Some(dir) = self.key_down {
                    self.game.press_shift(dir);
                }
            }
            GamePhase::Idle | GamePhase::Paused => {}
        }
    }

    /// Status lines printed after the terminal is restored.
    pub fn summary_lines(&self) -> [String; 4] {
        let s = &self.stats;
        [
            format!("[stackfall] seed {}", self.seed),
            format!(
                "[stackfall] final score {} level {} lines {}",
                self.game.score(),
                self.game.level(),
                self.game.lines()
            ),
            format!(
                "[stackfall] episodes {} pieces locked {} lines cleared {} four-line clears {}",
                self.game.episode_id() + 1,
                s.pieces_locked,
                s.lines_cleared,
                s.four_line_clears
            ),
            format!("[stackfall] best score {} games over {}", s.best_score, s.games_over),
        ]
    }
}
