//! Key event tracking for terminal environments.
//!
//! Turns raw `crossterm` key events into [`InputEvent`]s. Lateral keys become
//! press/release signals for the engine's auto-shift; everything else becomes
//! an edge-triggered action.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, shift_direction, InputEvent};
use crate::types::{GameAction, ShiftDirection};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks the held lateral key.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<ShiftDirection>,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
    /// Set once the terminal reports a release; the timeout is not needed after that.
    release_events_seen: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Option<ShiftDirection> {
        self.held
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        if let Some(dir) = shift_direction(key.code) {
            return self.handle_shift_key(dir, key.kind);
        }
        match key.kind {
            KeyEventKind::Press => handle_key_event(key).map(InputEvent::Action),
            // Auto-repeat only makes sense for the soft-drop step.
            KeyEventKind::Repeat => match handle_key_event(key) {
                Some(GameAction::SoftDrop) => Some(InputEvent::Action(GameAction::SoftDrop)),
                _ => None,
            },
            KeyEventKind::Release => None,
        }
    }

    fn handle_shift_key(&mut self, dir: ShiftDirection, kind: KeyEventKind) -> Option<InputEvent> {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_key_time = Instant::now();
                if self.held == Some(dir) {
                    None
                } else {
                    self.held = Some(dir);
                    Some(InputEvent::ShiftPressed(dir))
                }
            }
            KeyEventKind::Release => {
                self.release_events_seen = true;
                if self.held == Some(dir) {
                    self.held = None;
                }
                Some(InputEvent::ShiftReleased(dir))
            }
        }
    }

    /// Synthesize a release for a key that went quiet longer than the timeout.
    ///
    /// Call once per frame. Does nothing on terminals that report releases.
    pub fn update(&mut self) -> Option<InputEvent> {
        if self.release_events_seen {
            return None;
        }
        let dir = self.held?;
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        if self.last_key_time.elapsed() > timeout {
            self.held = None;
            return Some(InputEvent::ShiftReleased(dir));
        }
        None
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.last_key_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
