//! Stdout presenter and bell-based audio for the terminal front end.

use std::io::{self, Write};

use mole_core::GameConfig;
use mole_core::model::{Feedback, FeedbackKind, Level, ScoreBand};
use mole_core::ruler::{TickKind, ruler_ticks};
use services::{AudioSink, Cue, Presenter, RenderedCandidate};

const RULER_WIDTH: usize = 61;

pub struct TerminalPresenter {
    config: GameConfig,
}

impl TerminalPresenter {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    fn column(position: f64) -> usize {
        let col = (position.clamp(0.0, 1.0) * (RULER_WIDTH - 1) as f64).round();
        // Clamped above, so the cast cannot truncate.
        col as usize
    }

    fn ruler_line(&self) -> String {
        let mut line = vec!['─'; RULER_WIDTH];
        for tick in ruler_ticks(&self.config) {
            line[Self::column(tick.position)] = match tick.kind {
                TickKind::MajorRed => '┃',
                TickKind::MajorPink => '╋',
                TickKind::Major => '┼',
                TickKind::Minor => '┬',
            };
        }
        line.into_iter().collect()
    }

    fn labels_line(&self) -> String {
        let mut line = vec![' '; RULER_WIDTH + 3];
        for tick in ruler_ticks(&self.config) {
            if matches!(tick.kind, TickKind::MajorRed | TickKind::MajorPink) {
                let label = format!("{:.1}", tick.value);
                let start = Self::column(tick.position).min(RULER_WIDTH);
                for (offset, ch) in label.chars().enumerate() {
                    if let Some(slot) = line.get_mut(start + offset) {
                        *slot = ch;
                    }
                }
            }
        }
        line.into_iter().collect::<String>().trim_end().to_string()
    }

    fn emit(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }
}

impl Presenter for TerminalPresenter {
    fn render_candidates(&mut self, candidates: &[RenderedCandidate]) {
        let mut marks = vec![' '; RULER_WIDTH];
        for candidate in candidates {
            let digit = char::from_digit(candidate.id.value() % 10, 10).unwrap_or('?');
            marks[Self::column(candidate.position)] = digit;
        }
        let marks: String = marks.into_iter().collect();
        self.emit(marks.trim_end());
        self.emit(&self.ruler_line());
        self.emit(&self.labels_line());
        let choices = candidates
            .iter()
            .map(|c| format!("[{}]", c.id))
            .collect::<Vec<_>>()
            .join(" ");
        self.emit(&format!("whack one of {choices}"));
    }

    fn clear_candidates(&mut self) {}

    fn show_feedback(&mut self, feedback: &Feedback) {
        if feedback.kind != FeedbackKind::Neutral {
            self.emit(&feedback.text);
        }
    }

    fn update_score(&mut self, score: i64) {
        self.emit(&format!("score: {score}"));
    }

    fn update_level(&mut self, level: Level) {
        self.emit(&format!("level: {}", level.number()));
    }

    fn update_timer(&mut self, seconds_left: u32, warning: bool) {
        if warning {
            self.emit(&format!("time: {seconds_left}s !"));
        } else if seconds_left % 5 == 0 {
            self.emit(&format!("time: {seconds_left}s"));
        }
    }

    fn show_celebration(&mut self) {
        self.emit("🎉 Score passed 30, welcome to level 2! You now have 2 seconds per question.");
    }

    fn show_end_screen(&mut self, score: i64, band: ScoreBand) {
        self.emit("");
        self.emit(band.title());
        self.emit(&format!("{} final score: {score}", band.emoji()));
        self.emit(band.message());
        self.emit("type `s` to play again, `q` to quit");
    }

    fn show_target(&mut self, target: Option<f64>) {
        match target {
            Some(value) => self.emit(&format!("\nfind {value:.1} m")),
            None => self.emit("find ? m"),
        }
    }
}

/// Rings the terminal bell for the cues that matter; ignores write errors.
#[derive(Debug, Default)]
pub struct TerminalAudio {
    enabled: bool,
}

impl TerminalAudio {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl AudioSink for TerminalAudio {
    fn play_cue(&mut self, cue: Cue) {
        if !self.enabled {
            return;
        }
        tracing::trace!(?cue, "cue");
        if matches!(cue, Cue::Incorrect | Cue::End | Cue::Somber) {
            let mut err = io::stderr().lock();
            let _ = write!(err, "\x07");
            let _ = err.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruler_marks_whole_and_half_meters() {
        let presenter = TerminalPresenter::new(GameConfig::standard());
        let ruler: Vec<char> = presenter.ruler_line().chars().collect();
        assert_eq!(ruler.len(), RULER_WIDTH);
        assert_eq!(ruler[0], '┃');
        assert_eq!(ruler[30], '┃');
        assert_eq!(ruler[60], '┃');
        assert_eq!(ruler[15], '╋');
        assert_eq!(ruler[45], '╋');
        assert_eq!(ruler[3], '┬');
    }

    #[test]
    fn labels_line_starts_at_ruler_start() {
        let presenter = TerminalPresenter::new(GameConfig::standard());
        let labels = presenter.labels_line();
        assert!(labels.starts_with("1.0"));
        assert!(labels.contains("2.5"));
        assert!(labels.ends_with("3.0"));
    }

    #[test]
    fn columns_are_clamped() {
        assert_eq!(TerminalPresenter::column(-0.5), 0);
        assert_eq!(TerminalPresenter::column(2.0), RULER_WIDTH - 1);
        assert_eq!(TerminalPresenter::column(0.5), 30);
    }
}
