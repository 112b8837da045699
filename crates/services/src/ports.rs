//! Boundaries to the presentation and audio layers.

use serde::{Deserialize, Serialize};

use mole_core::model::{Candidate, CandidateId, Feedback, Level, ScoreBand};

/// A candidate as handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderedCandidate {
    pub id: CandidateId,
    pub value: f64,
    pub is_correct: bool,
    /// Normalized ruler position in `[0, 1]`.
    pub position: f64,
}

impl From<&Candidate> for RenderedCandidate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id(),
            value: candidate.value(),
            is_correct: candidate.is_correct(),
            position: candidate.position(),
        }
    }
}

/// Everything the engine asks the screen to do.
pub trait Presenter {
    fn render_candidates(&mut self, candidates: &[RenderedCandidate]);
    fn clear_candidates(&mut self);
    fn show_feedback(&mut self, feedback: &Feedback);
    fn update_score(&mut self, score: i64);
    fn update_level(&mut self, level: Level);
    fn update_timer(&mut self, seconds_left: u32, warning: bool);
    fn show_celebration(&mut self);
    fn show_end_screen(&mut self, score: i64, band: ScoreBand);
    /// `None` shows the placeholder used before a session starts.
    fn show_target(&mut self, target: Option<f64>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Correct,
    Incorrect,
    Click,
    Tick,
    /// Two descending tones played when the session ends.
    End,
    /// Low tone for a final score at or below zero.
    Somber,
}

/// Fire-and-forget sound effects. Implementations swallow their own failures.
pub trait AudioSink {
    fn play_cue(&mut self, cue: Cue);
}

/// Audio sink for when no audio device is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_cue(&mut self, _cue: Cue) {}
}
