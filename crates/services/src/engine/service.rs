use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use mole_core::model::{Feedback, Level, Round, RoundId, Session};
use mole_core::{Clock, GameConfig};

use super::outcome::RoundPhase;
use crate::ports::{AudioSink, Cue, Presenter, RenderedCandidate};
use crate::timers::{Fired, TimerHandle, TimerQueue};

//
// ─── TIMERS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TimerKind {
    SessionTick,
    QuestionDeadline(RoundId),
    ClearCandidates(RoundId),
    NextRound(RoundId),
    Cue(Cue),
    EndScreen,
}

/// A scheduled callback, tagged with the session generation that armed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct EngineTimer {
    pub(super) generation: u64,
    pub(super) kind: TimerKind,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Drives sessions and rounds for one player.
///
/// The engine never sleeps. Front ends forward clicks and commands, and call
/// [`RoundEngine::poll`] often enough for timers to fire on time; tests use a
/// fixed [`Clock`] and [`RoundEngine::advance`] instead.
pub struct RoundEngine<P, A> {
    pub(super) config: GameConfig,
    pub(super) clock: Clock,
    pub(super) rng: StdRng,
    pub(super) presenter: P,
    pub(super) audio: A,
    pub(super) session: Session,
    pub(super) round: Option<Round>,
    pub(super) phase: RoundPhase,
    pub(super) timers: TimerQueue<EngineTimer>,
    pub(super) deadline: Option<TimerHandle>,
    pub(super) generation: u64,
    pub(super) next_round_id: RoundId,
}

impl<P: Presenter, A: AudioSink> RoundEngine<P, A> {
    /// Standard game on the wall clock with an entropy-seeded RNG.
    #[must_use]
    pub fn new(presenter: P, audio: A) -> Self {
        let config = GameConfig::standard();
        Self {
            session: Session::new(&config),
            config,
            clock: Clock::system(),
            rng: StdRng::seed_from_u64(rand::random()),
            presenter,
            audio,
            round: None,
            phase: RoundPhase::Idle,
            timers: TimerQueue::new(),
            deadline: None,
            generation: 0,
            next_round_id: RoundId::new(1),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.session = Session::new(&config);
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The round currently on screen, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Starts a fresh session, discarding any session in progress.
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.cancel_all();
        self.session.begin(&self.config);
        self.round = None;

        self.presenter.update_score(self.session.score());
        self.presenter.update_level(Level::One);
        self.presenter.show_feedback(&Feedback::cleared());
        self.presenter
            .update_timer(self.session.time_remaining(), false);

        tracing::info!(generation = self.generation, "session started");
        self.schedule(now + Duration::seconds(1), TimerKind::SessionTick);
        self.begin_round(now);
    }

    /// Stops everything and restores the initial display without starting.
    pub fn reset(&mut self) {
        self.cancel_all();
        self.session.reset(&self.config);
        self.round = None;
        self.phase = RoundPhase::Idle;

        self.presenter.clear_candidates();
        self.presenter.update_score(0);
        self.presenter.update_level(Level::One);
        self.presenter
            .update_timer(self.session.time_remaining(), false);
        self.presenter.show_feedback(&Feedback::cleared());
        self.presenter.show_target(None);
        tracing::info!(generation = self.generation, "session reset");
    }

    /// Re-renders the current candidates after the surface changed size.
    pub fn relayout(&mut self) {
        if let Some(round) = &self.round {
            let rendered: Vec<RenderedCandidate> =
                round.candidates().iter().map(RenderedCandidate::from).collect();
            self.presenter.render_candidates(&rendered);
        }
    }

    /// Fires every timer due at or before the clock's current time and
    /// returns how many fired.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            self.fire(timer);
            fired += 1;
        }
        fired
    }

    /// Moves a fixed clock forward and polls. On a wall clock this only polls.
    pub fn advance(&mut self, delta: Duration) -> usize {
        self.clock.advance(delta);
        self.poll()
    }

    pub(super) fn schedule(&mut self, due: DateTime<Utc>, kind: TimerKind) -> TimerHandle {
        let timer = EngineTimer {
            generation: self.generation,
            kind,
        };
        self.timers.schedule(due, timer)
    }

    /// Drops every pending timer and invalidates any that might still be
    /// in flight by moving to a new generation.
    fn cancel_all(&mut self) {
        self.timers.clear();
        self.deadline = None;
        self.generation = self.generation.wrapping_add(1);
    }

    fn fire(&mut self, fired: Fired<EngineTimer>) {
        let Fired { due, payload } = fired;
        if payload.generation != self.generation {
            tracing::debug!(
                timer_generation = payload.generation,
                generation = self.generation,
                "stale timer dropped"
            );
            return;
        }

        match payload.kind {
            TimerKind::SessionTick => self.tick_session(due),
            TimerKind::QuestionDeadline(round) => self.expire_question(round, due),
            TimerKind::ClearCandidates(round) => self.clear_round(round, due),
            TimerKind::NextRound(round) => self.advance_round(round, due),
            TimerKind::Cue(cue) => self.audio.play_cue(cue),
            TimerKind::EndScreen => self.show_end_screen(due),
        }
    }
}

impl<P, A> fmt::Debug for RoundEngine<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundEngine")
            .field("session", &self.session)
            .field("round", &self.round.as_ref().map(Round::id))
            .field("phase", &self.phase)
            .field("pending_timers", &self.timers.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
