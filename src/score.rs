//! Driver-side scoring and leveling policy.
//!
//! The engine only reports how many rows a landing cleared; turning that
//! into points and gravity speed is configuration layered on top. Both
//! tables live in `termtris-types` and are never read by the engine.

use termtris::types::{LEVEL_TABLE, SCORE_TABLE};

/// Level derived from the cumulative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// 1-based level number shown to the player.
    pub number: u32,
    /// Gravity divisor: one row of fall per this many driver ticks.
    pub speed: u32,
}

/// Points for a single landing that cleared `rows_cleared` rows.
pub fn score_for(rows_cleared: usize) -> u32 {
    SCORE_TABLE[rows_cleared.min(SCORE_TABLE.len() - 1)]
}

/// Level and gravity speed for the given cumulative score.
///
/// The level is the first threshold the score has not reached; each level
/// up removes one tick from the gravity divisor, so pieces fall faster.
pub fn level_for(score: u32) -> Level {
    for (i, &threshold) in LEVEL_TABLE.iter().enumerate() {
        if score < threshold {
            return Level {
                number: i as u32 + 1,
                speed: (LEVEL_TABLE.len() - i) as u32,
            };
        }
    }
    // Above every threshold: stay at the top level and speed.
    Level {
        number: LEVEL_TABLE.len() as u32,
        speed: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_scores_grow_with_rows_cleared() {
        assert_eq!(score_for(0), 10);
        assert_eq!(score_for(1), 100);
        assert_eq!(score_for(4), 800);
        // Clamped; the engine never reports more than 4.
        assert_eq!(score_for(9), 800);
    }

    #[test]
    fn level_starts_slow_and_speeds_up() {
        assert_eq!(level_for(0), Level { number: 1, speed: 8 });
        assert_eq!(level_for(999), Level { number: 1, speed: 8 });
        assert_eq!(level_for(1000), Level { number: 2, speed: 7 });
        assert_eq!(level_for(70_000), Level { number: 8, speed: 1 });
    }

    #[test]
    fn level_is_monotonic_in_score() {
        let mut last = 0;
        for score in (0..100_000).step_by(500) {
            let level = level_for(score);
            assert!(level.number >= last);
            last = level.number;
        }
    }
}
