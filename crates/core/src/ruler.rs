use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// How a ruler tick is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    /// Whole meters (start, middle, end).
    MajorRed,
    /// Half meters between the whole ones.
    MajorPink,
    /// Any other multiple of five segments.
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerTick {
    pub index: u32,
    pub value: f64,
    pub position: f64,
    pub kind: TickKind,
}

/// Normalized position of `value` on the ruler, 0 at the start and 1 at the end.
#[must_use]
pub fn position_of(config: &GameConfig, value: f64) -> f64 {
    (value - config.start_value()) / config.span()
}

/// Inverse of [`position_of`].
#[must_use]
pub fn value_at(config: &GameConfig, position: f64) -> f64 {
    config.start_value() + position * config.span()
}

/// Tick marks for `segments + 1` evenly spaced divisions.
#[must_use]
pub fn ruler_ticks(config: &GameConfig) -> Vec<RulerTick> {
    let segments = config.segments();
    let half = segments / 2;
    let quarter = segments / 4;

    (0..=segments)
        .map(|index| {
            let position = f64::from(index) / f64::from(segments);
            let kind = if index == 0 || index == segments || (segments % 2 == 0 && index == half)
            {
                TickKind::MajorRed
            } else if segments % 4 == 0 && (index == quarter || index == half + quarter) {
                TickKind::MajorPink
            } else if index % 5 == 0 {
                TickKind::Major
            } else {
                TickKind::Minor
            };
            RulerTick {
                index,
                value: value_at(config, position),
                position,
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_span_unit_interval() {
        let config = GameConfig::standard();
        assert_eq!(position_of(&config, 1.0), 0.0);
        assert_eq!(position_of(&config, 2.0), 0.5);
        assert_eq!(position_of(&config, 3.0), 1.0);
        assert!((value_at(&config, 0.25) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn standard_ruler_marks_whole_and_half_meters() {
        let ticks = ruler_ticks(&GameConfig::standard());
        assert_eq!(ticks.len(), 21);

        let red: Vec<u32> = ticks
            .iter()
            .filter(|t| t.kind == TickKind::MajorRed)
            .map(|t| t.index)
            .collect();
        let pink: Vec<u32> = ticks
            .iter()
            .filter(|t| t.kind == TickKind::MajorPink)
            .map(|t| t.index)
            .collect();

        assert_eq!(red, vec![0, 10, 20]);
        assert_eq!(pink, vec![5, 15]);
        assert!(ticks.iter().filter(|t| t.kind == TickKind::Major).count() == 0);
        assert!((ticks[15].value - 2.5).abs() < 1e-9);
    }
}
