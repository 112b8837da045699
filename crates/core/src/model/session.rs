use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty level. Level two shortens the answer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    One,
    Two,
}

impl Level {
    /// Returns the level as shown to the player.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }
}

//
// ─── STATS ─────────────────────────────────────────────────────────────────────
//

/// Per-session answer tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub timeouts: u32,
}

impl SessionStats {
    /// Returns wrong answers and timeouts combined.
    #[must_use]
    pub fn misses(&self) -> u32 {
        self.incorrect.saturating_add(self.timeouts)
    }
}

/// Why points were deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    WrongCandidate,
    Timeout,
}

//
// ─── TIMER TICK ────────────────────────────────────────────────────────────────
//

/// Result of one session-timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub remaining: u32,
    pub warning: bool,
    pub sound: bool,
    pub expired: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Mutable state of one timed play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: i64,
    level: Level,
    running: bool,
    time_remaining: u32,
    has_leveled_up: bool,
    stats: SessionStats,
}

impl Session {
    /// An idle session showing the full game time.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            level: Level::One,
            running: false,
            time_remaining: config.game_secs(),
            has_leveled_up: false,
            stats: SessionStats::default(),
        }
    }

    /// Clears everything and starts running.
    pub fn begin(&mut self, config: &GameConfig) {
        *self = Self::new(config);
        self.running = true;
    }

    /// Clears everything without starting.
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Marks the session as no longer running. Score and stats are kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns the current score, which may be negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Returns the current level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns true while the session clock is counting down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns whole seconds left in the session.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Returns true once level two has been granted this session.
    #[must_use]
    pub fn has_leveled_up(&self) -> bool {
        self.has_leveled_up
    }

    /// Returns the answer tallies so far.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Counts a round that was put on screen.
    pub fn record_round(&mut self) {
        self.stats.rounds = self.stats.rounds.saturating_add(1);
    }

    /// Adds points for a correct answer and returns the new score.
    pub fn award(&mut self, points: u32) -> i64 {
        self.score += i64::from(points);
        self.stats.correct = self.stats.correct.saturating_add(1);
        self.score
    }

    /// Removes points for a miss and returns the new score. No floor.
    pub fn deduct(&mut self, points: u32, miss: Miss) -> i64 {
        self.score -= i64::from(points);
        match miss {
            Miss::WrongCandidate => self.stats.incorrect = self.stats.incorrect.saturating_add(1),
            Miss::Timeout => self.stats.timeouts = self.stats.timeouts.saturating_add(1),
        }
        self.score
    }

    /// Grants level two the first time the score reaches the threshold.
    ///
    /// Returns `true` only on the call that performs the level-up; the level
    /// is kept even if the score later falls back under the threshold.
    pub fn check_level_up(&mut self, config: &GameConfig) -> bool {
        if self.score >= config.level_up_score() && self.level == Level::One && !self.has_leveled_up
        {
            self.level = Level::Two;
            self.has_leveled_up = true;
            return true;
        }
        false
    }

    /// Counts one second down.
    pub fn tick(&mut self, config: &GameConfig) -> TimerTick {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        let remaining = self.time_remaining;
        let warning = remaining <= config.warning_secs();
        TimerTick {
            remaining,
            warning,
            sound: warning && remaining > 0,
            expired: remaining == 0,
        }
    }
}
