//! Scoring module - line clear points, drop points, levels and gravity speed
//!
//! - Line clears: `LINE_SCORES[lines] * level`, with level taken before the
//!   cleared lines are counted.
//! - Soft drop: 1 point per manual step. Hard drop: 2 points per row traveled.
//! - Level: `lines / 10 + 1`.
//! - Gravity: `max(80, 1000 - (level - 1) * 70)` milliseconds per row.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_SCORES, SOFT_DROP_POINTS,
};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Points for a drop of `cells` rows.
pub fn calculate_drop_score(cells: u32, hard_drop: bool) -> u32 {
    if hard_drop {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}

/// Level reached after `total_lines` cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level.
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);
        assert_eq!(calculate_line_score(2, 3), 900);
        assert_eq!(calculate_line_score(5, 1), 0);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(calculate_drop_score(18, true), 36);
        assert_eq!(calculate_drop_score(3, false), 3);
        assert_eq!(calculate_drop_score(0, true), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn test_drop_interval_by_level() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 930);
        assert_eq!(get_drop_interval_ms(10), 370);
        assert_eq!(get_drop_interval_ms(14), 90);
        assert_eq!(get_drop_interval_ms(15), 80);
        assert_eq!(get_drop_interval_ms(99), 80);
        // Level 0 never occurs but must not underflow.
        assert_eq!(get_drop_interval_ms(0), 1000);
    }
}
