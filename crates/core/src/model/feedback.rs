use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    /// Nothing to show; used to blank the feedback line.
    Neutral,
    Correct,
    Incorrect,
    Timeout,
}

/// Text shown under the ruler after a round resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    #[must_use]
    pub fn cleared() -> Self {
        Self {
            kind: FeedbackKind::Neutral,
            text: String::new(),
        }
    }

    #[must_use]
    pub fn correct(points: u32) -> Self {
        Self {
            kind: FeedbackKind::Correct,
            text: format!("✓ Correct! +{points}"),
        }
    }

    /// `distance` is how far the clicked value was from the target.
    #[must_use]
    pub fn incorrect(distance: f64, penalty: u32) -> Self {
        Self {
            kind: FeedbackKind::Incorrect,
            text: format!("✗ Wrong! Off by {distance:.2} m, -{penalty}"),
        }
    }

    #[must_use]
    pub fn timeout(penalty: u32) -> Self {
        Self {
            kind: FeedbackKind::Timeout,
            text: format!("⏱ Time's up! -{penalty}"),
        }
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.kind == FeedbackKind::Neutral
    }
}
