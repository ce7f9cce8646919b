//! DAS/ARR auto-shift for held lateral movement.
//!
//! Pressing a direction moves once immediately (the controller does that move).
//! While the direction stays held, the first repeat fires once `das_ms` has
//! elapsed and then one repeat per `arr_ms`. Leftover time carries between
//! updates, so a coarse tick yields as many repeats as a fine one.
//! Releasing the key or switching direction restarts both timers.

use arrayvec::ArrayVec;

use crate::types::{ShiftDirection, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

/// Upper bound of repeats reported by a single update.
pub const MAX_REPEATS_PER_UPDATE: usize = 32;

/// Auto-shift timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatConfig {
    pub das_ms: u32,
    pub arr_ms: u32,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            das_ms: DEFAULT_DAS_MS,
            arr_ms: DEFAULT_ARR_MS,
        }
    }
}

/// Tracks the held direction and its repeat timers.
#[derive(Debug, Clone)]
pub struct AutoShift {
    held: Option<ShiftDirection>,
    das_timer: u32,
    arr_accumulator: u32,
    config: RepeatConfig,
}

impl AutoShift {
    pub fn new() -> Self {
        Self::with_config(RepeatConfig::default())
    }

    pub fn with_config(config: RepeatConfig) -> Self {
        Self {
            held: None,
            das_timer: 0,
            arr_accumulator: 0,
            config: RepeatConfig {
                // A zero rate would repeat forever within one update.
                arr_ms: config.arr_ms.max(1),
                ..config
            },
        }
    }

    pub fn config(&self) -> RepeatConfig {
        self.config
    }

    pub fn held(&self) -> Option<ShiftDirection> {
        self.held
    }

    /// Record a key press. Returns true when this is a new activation, in
    /// which case the caller performs the immediate move.
    pub fn press(&mut self, dir: ShiftDirection) -> bool {
        if self.held == Some(dir) {
            return false;
        }
        self.held = Some(dir);
        self.restart_timers();
        true
    }

    /// Record a key release. Releasing a direction that is not held is ignored.
    pub fn release(&mut self, dir: ShiftDirection) {
        if self.held == Some(dir) {
            self.reset();
        }
    }

    /// Forget the held direction.
    pub fn reset(&mut self) {
        self.held = None;
        self.restart_timers();
    }

    fn restart_timers(&mut self) {
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }

    /// Advance timers by `elapsed_ms` and return the repeats that fired.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<ShiftDirection, MAX_REPEATS_PER_UPDATE> {
        let mut repeats = ArrayVec::new();
        let Some(dir) = self.held else {
            return repeats;
        };

        let das = self.config.das_ms;
        let prev_das = self.das_timer;
        self.das_timer = self.das_timer.saturating_add(elapsed_ms);
        if self.das_timer < das {
            return repeats;
        }

        if prev_das < das {
            // DAS just expired: fire the first repeat, carry the overshoot.
            let _ = repeats.try_push(dir);
            self.arr_accumulator = self.das_timer - das;
        } else {
            self.arr_accumulator = self.arr_accumulator.saturating_add(elapsed_ms);
        }

        while self.arr_accumulator >= self.config.arr_ms {
            self.arr_accumulator -= self.config.arr_ms;
            if repeats.try_push(dir).is_err() {
                // Saturated; drop the backlog instead of replaying it later.
                self.arr_accumulator = 0;
                break;
            }
        }

        repeats
    }
}

impl Default for AutoShift {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_repeat_fires_when_das_expires() {
        let mut shift = AutoShift::new();
        assert!(shift.press(ShiftDirection::Left));

        assert!(shift.update(169).is_empty());
        assert_eq!(shift.update(1).as_slice(), &[ShiftDirection::Left]);

        // One ARR later, one more.
        assert!(shift.update(39).is_empty());
        assert_eq!(shift.update(1).as_slice(), &[ShiftDirection::Left]);
    }

    #[test]
    fn test_16ms_ticks_repeat_every_40ms_after_delay() {
        let mut shift = AutoShift::new();
        shift.press(ShiftDirection::Right);

        let mut fired_at = Vec::new();
        for step in 1..=25u32 {
            if !shift.update(16).is_empty() {
                fired_at.push(step * 16);
            }
        }
        // DAS expires during the 176ms tick; repeats then every 40ms of held time.
        assert_eq!(fired_at, vec![176, 224, 256, 304, 336, 384]);
    }

    #[test]
    fn test_coarse_update_carries_overshoot() {
        let mut shift = AutoShift::new();
        shift.press(ShiftDirection::Left);
        // 170 + 3 * 40 = 290
        assert_eq!(shift.update(290).len(), 4);
        assert!(shift.update(39).is_empty());
    }

    #[test]
    fn test_pressing_same_direction_again_is_not_a_new_activation() {
        let mut shift = AutoShift::new();
        assert!(shift.press(ShiftDirection::Left));
        shift.update(100);
        assert!(!shift.press(ShiftDirection::Left));
        // Timers keep running.
        assert_eq!(shift.update(70).len(), 1);
    }

    #[test]
    fn test_switching_direction_restarts_timers() {
        let mut shift = AutoShift::new();
        shift.press(ShiftDirection::Left);
        shift.update(160);
        assert!(shift.press(ShiftDirection::Right));
        assert!(shift.update(20).is_empty());
        assert_eq!(shift.update(150).as_slice(), &[ShiftDirection::Right]);
    }

    #[test]
    fn test_release_stops_repeats() {
        let mut shift = AutoShift::new();
        shift.press(ShiftDirection::Left);
        assert!(!shift.update(300).is_empty());

        // Releasing the other direction does nothing.
        shift.release(ShiftDirection::Right);
        assert_eq!(shift.held(), Some(ShiftDirection::Left));

        shift.release(ShiftDirection::Left);
        assert_eq!(shift.held(), None);
        assert!(shift.update(1000).is_empty());
    }

    #[test]
    fn test_custom_config() {
        let mut shift = AutoShift::with_config(RepeatConfig {
            das_ms: 100,
            arr_ms: 25,
        });
        shift.press(ShiftDirection::Right);
        assert!(shift.update(99).is_empty());
        assert_eq!(shift.update(51).len(), 3);
    }

    #[test]
    fn test_huge_update_is_bounded() {
        let mut shift = AutoShift::with_config(RepeatConfig { das_ms: 0, arr_ms: 0 });
        shift.press(ShiftDirection::Left);
        assert_eq!(shift.update(u32::MAX).len(), MAX_REPEATS_PER_UPDATE);
    }
}
