use mole_core::model::{CandidateId, RoundId};

/// Where the engine is in the question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No session has started, or it was reset.
    Idle,
    /// Candidates are on screen and the deadline is armed.
    AwaitingAnswer,
    /// The round was answered or timed out; the next one is pending.
    Resolved,
    /// Time ran out. The end screen follows.
    SessionEnded,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerOutcome {
    pub round: RoundId,
    pub candidate: CandidateId,
    pub correct: bool,
    /// Points added (correct) or removed (incorrect), 1 to 10.
    pub points: u32,
    /// Distance between the clicked value and the target.
    pub distance: f64,
    pub score: i64,
    pub leveled_up: bool,
}
