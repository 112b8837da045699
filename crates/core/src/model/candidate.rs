use crate::model::ids::CandidateId;

/// Distance under which a value counts as the target at tenth precision.
pub const MATCH_TOLERANCE: f64 = 0.05;

/// One clickable value shown during a round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    id: CandidateId,
    value: f64,
    is_correct: bool,
    position: f64,
}

impl Candidate {
    /// Creates a candidate at `position` on the ruler.
    #[must_use]
    pub fn new(id: CandidateId, value: f64, is_correct: bool, position: f64) -> Self {
        Self {
            id,
            value,
            is_correct,
            position,
        }
    }

    /// Returns the candidate id within its round.
    #[must_use]
    pub fn id(&self) -> CandidateId {
        self.id
    }

    /// Returns the value shown on the candidate.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns true if the value matches the round target.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Normalized ruler position in `[0, 1]`.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns how far the value is from `target`.
    #[must_use]
    pub fn distance_to(&self, target: f64) -> f64 {
        (self.value - target).abs()
    }

    /// Returns true if the value equals `target` at tenth precision.
    #[must_use]
    pub fn matches(&self, target: f64) -> bool {
        self.distance_to(target) < MATCH_TOLERANCE
    }
}
