use serde::{Deserialize, Serialize};

/// Closing message tier for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    /// Zero or below.
    Cry,
    /// 1 to 10.
    Encourage,
    /// 11 to 30.
    Good,
    /// Above 30.
    Genius,
}

impl ScoreBand {
    #[must_use]
    pub fn classify(score: i64) -> Self {
        match score {
            i64::MIN..=0 => ScoreBand::Cry,
            1..=10 => ScoreBand::Encourage,
            11..=30 => ScoreBand::Good,
            _ => ScoreBand::Genius,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ScoreBand::Cry => "😢 Game over",
            ScoreBand::Encourage | ScoreBand::Good | ScoreBand::Genius => "Game over",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            ScoreBand::Cry => "😢",
            ScoreBand::Encourage => "💪",
            ScoreBand::Good => "👍",
            ScoreBand::Genius => "🌟",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Cry => "Don't give up, keep trying!",
            ScoreBand::Encourage => "Keep it up!",
            ScoreBand::Good => "Great job!",
            ScoreBand::Genius => "Are you a genius?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(ScoreBand::classify(-5), ScoreBand::Cry);
        assert_eq!(ScoreBand::classify(0), ScoreBand::Cry);
        assert_eq!(ScoreBand::classify(1), ScoreBand::Encourage);
        assert_eq!(ScoreBand::classify(10), ScoreBand::Encourage);
        assert_eq!(ScoreBand::classify(11), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(30), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(31), ScoreBand::Genius);
        assert_eq!(ScoreBand::classify(i64::MIN), ScoreBand::Cry);
    }

    #[test]
    fn only_cry_title_carries_emoji() {
        assert!(ScoreBand::Cry.title().starts_with(ScoreBand::Cry.emoji()));
        assert_eq!(ScoreBand::Genius.title(), "Game over");
        assert_eq!(ScoreBand::Genius.message(), "Are you a genius?");
    }
}
