use chrono::{DateTime, Duration, Utc};

use mole_core::config::{CELEBRATION_CUE_OFFSETS_MS, END_SCREEN_DELAY_MS, GENIUS_CUE_OFFSETS_MS};
use mole_core::model::ScoreBand;

use super::outcome::RoundPhase;
use super::service::{RoundEngine, TimerKind};
use crate::ports::{AudioSink, Cue, Presenter};

impl<P: Presenter, A: AudioSink> RoundEngine<P, A> {
    /// One-second session tick.
    pub(super) fn tick_session(&mut self, due: DateTime<Utc>) {
        if !self.session.is_running() {
            return;
        }
        let tick = self.session.tick(&self.config);
        self.presenter.update_timer(tick.remaining, tick.warning);
        if tick.sound {
            self.audio.play_cue(Cue::Tick);
        }

        if tick.expired {
            self.end_session(due);
        } else {
            self.schedule(due + Duration::seconds(1), TimerKind::SessionTick);
        }
    }

    /// Ends the session whatever the round was doing.
    pub(super) fn end_session(&mut self, at: DateTime<Utc>) {
        self.session.stop();
        self.timers.clear();
        self.deadline = None;
        self.round = None;
        self.phase = RoundPhase::SessionEnded;

        self.presenter.clear_candidates();
        self.audio.play_cue(Cue::End);

        let stats = self.session.stats();
        tracing::info!(
            score = self.session.score(),
            level = self.session.level().number(),
            rounds = stats.rounds,
            correct = stats.correct,
            misses = stats.misses(),
            "session ended"
        );
        self.schedule(
            at + Duration::milliseconds(END_SCREEN_DELAY_MS),
            TimerKind::EndScreen,
        );
    }

    pub(super) fn show_end_screen(&mut self, at: DateTime<Utc>) {
        let score = self.session.score();
        let band = ScoreBand::classify(score);
        self.presenter.show_end_screen(score, band);

        match band {
            ScoreBand::Cry => self.audio.play_cue(Cue::Somber),
            ScoreBand::Genius => self.play_staggered(Cue::Correct, &GENIUS_CUE_OFFSETS_MS, at),
            ScoreBand::Encourage | ScoreBand::Good => {}
        }
    }

    /// Runs the one-time level-up after a scoring event.
    pub(super) fn check_level_up(&mut self, at: DateTime<Utc>) -> bool {
        if !self.session.check_level_up(&self.config) {
            return false;
        }
        tracing::info!(score = self.session.score(), "level two reached");
        self.presenter.update_level(self.session.level());
        self.presenter.show_celebration();
        self.play_staggered(Cue::Correct, &CELEBRATION_CUE_OFFSETS_MS, at);
        true
    }

    /// Plays `cue` now for a zero offset and schedules the rest.
    fn play_staggered(&mut self, cue: Cue, offsets_ms: &[i64], at: DateTime<Utc>) {
        for &offset in offsets_ms {
            if offset == 0 {
                self.audio.play_cue(cue);
            } else {
                self.schedule(at + Duration::milliseconds(offset), TimerKind::Cue(cue));
            }
        }
    }
}
