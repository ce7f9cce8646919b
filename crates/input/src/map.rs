//! Key mapping from terminal events to the engine's input vocabulary.

use crate::types::{GameAction, ShiftDirection};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Edge-triggered action.
    Action(GameAction),
    /// A lateral key went down (starts DAS/ARR).
    ShiftPressed(ShiftDirection),
    /// A lateral key went up.
    ShiftReleased(ShiftDirection),
}

/// Lateral keys: arrows, `a`/`d` and `h`/`l`.
pub fn shift_direction(code: KeyCode) -> Option<ShiftDirection> {
    match code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(ShiftDirection::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(ShiftDirection::Right),
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if let Some(dir) = shift_direction(key.code) {
        return Some(dir.action());
    }
    match key.code {
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | 'x' | 'X') => {
            Some(GameAction::RotateCw)
        }
        KeyCode::Char('z' | 'Z' | 'y' | 'Y') => Some(GameAction::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c' | 'C') => Some(GameAction::Hold),
        KeyCode::Char('p' | 'P') => Some(GameAction::Pause),
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || matches!(key.code, KeyCode::Char('q' | 'Q'))
}
