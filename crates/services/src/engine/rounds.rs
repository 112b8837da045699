use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use mole_core::config::{CLICK_RESOLVE_DELAY_MS, NEXT_ROUND_DELAY_MS};
use mole_core::model::{CandidateId, Feedback, Miss, Round, RoundId};

use super::outcome::{AnswerOutcome, RoundPhase};
use super::service::{RoundEngine, TimerKind};
use crate::error::EngineError;
use crate::ports::{AudioSink, Cue, Presenter, RenderedCandidate};

impl<P: Presenter, A: AudioSink> RoundEngine<P, A> {
    /// Handles a click on one of the current candidates.
    ///
    /// Only the first click of a round counts. Anything else (no session,
    /// no round on screen, a second click, a stale id) is rejected without
    /// touching the session.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` describing why the click was ignored.
    pub fn click(&mut self, candidate: CandidateId) -> Result<AnswerOutcome, EngineError> {
        if !self.session.is_running() {
            return Err(EngineError::NotPlaying);
        }
        let now = self.clock.now();

        let Some(round) = self.round.as_mut() else {
            return Err(EngineError::NoActiveRound);
        };
        let round_id = round.id();
        let Some(picked) = round.candidate(candidate).copied() else {
            return Err(EngineError::UnknownCandidate {
                round: round_id,
                candidate,
            });
        };
        if !round.latch_answer() {
            tracing::debug!(round = %round_id, %candidate, "late click ignored");
            return Err(EngineError::AlreadyAnswered(round_id));
        }
        let target = round.target();

        if let Some(handle) = self.deadline.take() {
            self.timers.cancel(handle);
        }
        self.phase = RoundPhase::Resolved;
        self.audio.play_cue(Cue::Click);

        let points = self.draw_points();
        let distance = picked.distance_to(target);
        let score = if picked.is_correct() {
            self.audio.play_cue(Cue::Correct);
            let score = self.session.award(points);
            self.presenter.show_feedback(&Feedback::correct(points));
            score
        } else {
            self.audio.play_cue(Cue::Incorrect);
            let score = self.session.deduct(points, Miss::WrongCandidate);
            self.presenter
                .show_feedback(&Feedback::incorrect(distance, points));
            score
        };
        self.presenter.update_score(score);
        let leveled_up = self.check_level_up(now);

        tracing::debug!(
            round = %round_id,
            correct = picked.is_correct(),
            points,
            score,
            "round answered"
        );
        self.schedule(
            now + Duration::milliseconds(CLICK_RESOLVE_DELAY_MS),
            TimerKind::ClearCandidates(round_id),
        );

        Ok(AnswerOutcome {
            round: round_id,
            candidate,
            correct: picked.is_correct(),
            points,
            distance,
            score,
            leveled_up,
        })
    }

    /// Shows a new target and candidates and arms the answer deadline.
    pub(super) fn begin_round(&mut self, at: DateTime<Utc>) {
        if let Some(handle) = self.deadline.take() {
            self.timers.cancel(handle);
        }
        self.presenter.clear_candidates();

        let id = self.next_round_id;
        self.next_round_id = id.next();
        let mut round = Round::generate(id, &self.config, &mut self.rng);
        let due = at + self.config.question_window(self.session.level());
        round.arm_deadline(due);
        self.session.record_round();

        tracing::debug!(
            round = %id,
            target_value = round.target(),
            used_fallback = round.used_fallback(),
            "round started"
        );
        if round.used_fallback() {
            tracing::warn!(round = %id, "decoy spacing fell back to fixed slots");
        }

        self.presenter.show_target(Some(round.target()));
        let rendered: Vec<RenderedCandidate> =
            round.candidates().iter().map(RenderedCandidate::from).collect();
        self.presenter.render_candidates(&rendered);

        self.deadline = Some(self.schedule(due, TimerKind::QuestionDeadline(id)));
        self.round = Some(round);
        self.phase = RoundPhase::AwaitingAnswer;
    }

    /// Deadline callback: penalizes an unanswered round and clears it at once.
    pub(super) fn expire_question(&mut self, round_id: RoundId, due: DateTime<Utc>) {
        if !self.session.is_running() {
            return;
        }
        let Some(round) = self.round.as_mut().filter(|round| round.id() == round_id) else {
            return;
        };
        if !round.latch_answer() {
            return;
        }
        self.deadline = None;
        self.phase = RoundPhase::Resolved;

        let penalty = self.draw_points();
        let score = self.session.deduct(penalty, Miss::Timeout);
        self.presenter.show_feedback(&Feedback::timeout(penalty));
        self.audio.play_cue(Cue::Incorrect);
        self.presenter.update_score(score);
        self.check_level_up(due);

        tracing::debug!(round = %round_id, penalty, score, "round timed out");
        self.clear_round(round_id, due);
    }

    /// Takes the resolved round off screen and queues the next one.
    pub(super) fn clear_round(&mut self, round_id: RoundId, at: DateTime<Utc>) {
        if self.round.as_ref().map(Round::id) != Some(round_id) {
            return;
        }
        self.round = None;
        self.presenter.clear_candidates();
        self.schedule(
            at + Duration::milliseconds(NEXT_ROUND_DELAY_MS),
            TimerKind::NextRound(round_id),
        );
    }

    pub(super) fn advance_round(&mut self, resolved: RoundId, at: DateTime<Utc>) {
        if !self.session.is_running() || self.phase != RoundPhase::Resolved {
            return;
        }
        if self.round.is_some() {
            tracing::debug!(round = %resolved, "next round already on screen");
            return;
        }
        self.begin_round(at);
        self.presenter.show_feedback(&Feedback::cleared());
    }

    /// Points won or lost on one answer, uniform in 1..=10.
    fn draw_points(&mut self) -> u32 {
        self.rng.random_range(1..=10)
    }
}
