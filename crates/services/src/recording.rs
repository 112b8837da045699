//! In-memory presenter and audio sink that record every call.
//!
//! Used by tests and by headless runs of the engine.

use mole_core::model::{Feedback, Level, ScoreBand};

use crate::ports::{AudioSink, Cue, Presenter, RenderedCandidate};

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    RenderCandidates(Vec<RenderedCandidate>),
    ClearCandidates,
    Feedback(Feedback),
    Score(i64),
    Level(Level),
    Timer { seconds_left: u32, warning: bool },
    Celebration,
    EndScreen { score: i64, band: ScoreBand },
    Target(Option<f64>),
}

/// Keeps the full call log plus a mirror of what the screen would show.
#[derive(Debug, Clone)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
    visible: Vec<RenderedCandidate>,
    score: i64,
    level: Level,
    timer: (u32, bool),
    feedback: Feedback,
    target: Option<f64>,
    end_screen: Option<(i64, ScoreBand)>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            visible: Vec::new(),
            score: 0,
            level: Level::One,
            timer: (0, false),
            feedback: Feedback::cleared(),
            target: None,
            end_screen: None,
        }
    }

    #[must_use]
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    #[must_use]
    pub fn visible_candidates(&self) -> &[RenderedCandidate] {
        &self.visible
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn timer(&self) -> (u32, bool) {
        self.timer
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    #[must_use]
    pub fn end_screen(&self) -> Option<(i64, ScoreBand)> {
        self.end_screen
    }

    #[must_use]
    pub fn celebrations(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, PresenterEvent::Celebration))
            .count()
    }

    #[must_use]
    pub fn renders(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, PresenterEvent::RenderCandidates(_)))
            .count()
    }
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for RecordingPresenter {
    fn render_candidates(&mut self, candidates: &[RenderedCandidate]) {
        self.visible = candidates.to_vec();
        self.events
            .push(PresenterEvent::RenderCandidates(candidates.to_vec()));
    }

    fn clear_candidates(&mut self) {
        self.visible.clear();
        self.events.push(PresenterEvent::ClearCandidates);
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.feedback = feedback.clone();
        self.events.push(PresenterEvent::Feedback(feedback.clone()));
    }

    fn update_score(&mut self, score: i64) {
        self.score = score;
        self.events.push(PresenterEvent::Score(score));
    }

    fn update_level(&mut self, level: Level) {
        self.level = level;
        self.events.push(PresenterEvent::Level(level));
    }

    fn update_timer(&mut self, seconds_left: u32, warning: bool) {
        self.timer = (seconds_left, warning);
        self.events.push(PresenterEvent::Timer {
            seconds_left,
            warning,
        });
    }

    fn show_celebration(&mut self) {
        self.events.push(PresenterEvent::Celebration);
    }

    fn show_end_screen(&mut self, score: i64, band: ScoreBand) {
        self.end_screen = Some((score, band));
        self.events.push(PresenterEvent::EndScreen { score, band });
    }

    fn show_target(&mut self, target: Option<f64>) {
        self.target = target;
        self.events.push(PresenterEvent::Target(target));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    cues: Vec<Cue>,
}

impl RecordingAudio {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    #[must_use]
    pub fn count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|played| **played == cue).count()
    }
}

impl AudioSink for RecordingAudio {
    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
