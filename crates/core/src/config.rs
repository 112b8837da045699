use chrono::Duration;
use thiserror::Error;

use crate::model::Level;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("ruler range must be finite with start < end, got [{start}, {end}]")]
    InvalidRange { start: f64, end: f64 },

    #[error("ruler needs at least one segment")]
    InvalidSegments,

    #[error("a round needs at least two candidates, got {0}")]
    InvalidMoleCount(usize),

    #[error("game time must be > 0 seconds")]
    InvalidGameTime,

    #[error("minimum candidate distance must be finite and >= 0, got {0}")]
    InvalidMinDistance(f64),
}

//
// ─── PACING ────────────────────────────────────────────────────────────────────
//

/// Answer window while on level one.
pub const QUESTION_WINDOW_LEVEL_ONE_MS: i64 = 3_000;
/// Answer window after the level-up.
pub const QUESTION_WINDOW_LEVEL_TWO_MS: i64 = 2_000;
/// Delay between a click and clearing the candidates.
pub const CLICK_RESOLVE_DELAY_MS: i64 = 600;
/// Delay between clearing the candidates and showing the next round.
pub const NEXT_ROUND_DELAY_MS: i64 = 100;
/// Delay between the end of a session and the end screen.
pub const END_SCREEN_DELAY_MS: i64 = 500;
/// Offsets of the celebration cues played on level-up.
pub const CELEBRATION_CUE_OFFSETS_MS: [i64; 3] = [0, 200, 400];
/// Offsets of the cues played on a genius end screen.
pub const GENIUS_CUE_OFFSETS_MS: [i64; 2] = [0, 200];

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Fixed game constants.
///
/// The game only ever runs with [`GameConfig::standard`]; the validated
/// constructor exists so tests can shrink the ruler or widen the spacing to
/// reach edge cases such as the decoy fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    start_value: f64,
    end_value: f64,
    segments: u32,
    mole_count: usize,
    game_secs: u32,
    min_distance: f64,
    max_attempts_per_decoy: u32,
    level_up_score: i64,
    warning_secs: u32,
}

impl GameConfig {
    /// The 1 m to 3 m ruler with five creatures and a 30 second session.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            start_value: 1.0,
            end_value: 3.0,
            segments: 20,
            mole_count: 5,
            game_secs: 30,
            min_distance: 0.15,
            max_attempts_per_decoy: 100,
            level_up_score: 30,
            warning_secs: 5,
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the range is empty or not finite, if there are
    /// fewer than two candidates, or if any count or distance is out of range.
    pub fn new(
        start_value: f64,
        end_value: f64,
        segments: u32,
        mole_count: usize,
        game_secs: u32,
        min_distance: f64,
    ) -> Result<Self, ConfigError> {
        if !start_value.is_finite() || !end_value.is_finite() || start_value >= end_value {
            return Err(ConfigError::InvalidRange {
                start: start_value,
                end: end_value,
            });
        }
        if segments == 0 {
            return Err(ConfigError::InvalidSegments);
        }
        if mole_count < 2 {
            return Err(ConfigError::InvalidMoleCount(mole_count));
        }
        if game_secs == 0 {
            return Err(ConfigError::InvalidGameTime);
        }
        if !min_distance.is_finite() || min_distance < 0.0 {
            return Err(ConfigError::InvalidMinDistance(min_distance));
        }

        Ok(Self {
            start_value,
            end_value,
            segments,
            mole_count,
            game_secs,
            min_distance,
            ..Self::standard()
        })
    }

    /// Returns the value at the left end of the ruler.
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    /// Returns the value at the right end of the ruler.
    #[must_use]
    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    /// Returns the length of the ruler in value units.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_value - self.start_value
    }

    /// Returns the number of ruler divisions.
    #[must_use]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Candidates per round, the correct one included.
    #[must_use]
    pub fn mole_count(&self) -> usize {
        self.mole_count
    }

    /// Returns how many wrong candidates each round shows.
    #[must_use]
    pub fn decoy_count(&self) -> usize {
        self.mole_count - 1
    }

    /// Returns the session length in seconds.
    #[must_use]
    pub fn game_secs(&self) -> u32 {
        self.game_secs
    }

    /// Returns the smallest gap allowed between sampled candidate values.
    #[must_use]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Returns how many samples a decoy slot gets before falling back.
    #[must_use]
    pub fn max_attempts_per_decoy(&self) -> u32 {
        self.max_attempts_per_decoy
    }

    /// Returns the score that unlocks level two.
    #[must_use]
    pub fn level_up_score(&self) -> i64 {
        self.level_up_score
    }

    /// Seconds remaining at or below which the timer is shown as a warning.
    #[must_use]
    pub fn warning_secs(&self) -> u32 {
        self.warning_secs
    }

    /// How long the player has to answer at the given level.
    #[must_use]
    pub fn question_window(&self, level: Level) -> Duration {
        match level {
            Level::One => Duration::milliseconds(QUESTION_WINDOW_LEVEL_ONE_MS),
            Level::Two => Duration::milliseconds(QUESTION_WINDOW_LEVEL_TWO_MS),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_matches_game_constants() {
        let config = GameConfig::standard();
        assert_eq!(config.start_value(), 1.0);
        assert_eq!(config.end_value(), 3.0);
        assert_eq!(config.mole_count(), 5);
        assert_eq!(config.decoy_count(), 4);
        assert_eq!(config.game_secs(), 30);
        assert_eq!(config.max_attempts_per_decoy(), 100);
        assert_eq!(config.level_up_score(), 30);
    }

    #[test]
    fn question_window_shrinks_on_level_two() {
        let config = GameConfig::standard();
        assert_eq!(config.question_window(Level::One), Duration::seconds(3));
        assert_eq!(config.question_window(Level::Two), Duration::seconds(2));
    }

    #[test]
    fn new_rejects_inverted_range() {
        let err = GameConfig::new(3.0, 1.0, 20, 5, 30, 0.15).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { .. }));
    }

    #[test]
    fn new_rejects_single_candidate() {
        let err = GameConfig::new(1.0, 3.0, 20, 1, 30, 0.15).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMoleCount(1));
    }

    #[test]
    fn new_rejects_negative_spacing() {
        let err = GameConfig::new(1.0, 3.0, 20, 5, 30, -0.1).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMinDistance(_)));
    }

    #[test]
    fn new_keeps_fixed_rules() {
        let config = GameConfig::new(1.0, 1.4, 4, 5, 10, 0.15).unwrap();
        assert_eq!(config.level_up_score(), 30);
        assert_eq!(config.warning_secs(), 5);
        assert!((config.span() - 0.4).abs() < 1e-9);
    }
}
