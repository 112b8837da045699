//! Target and decoy value generation.
//!
//! Values live on the configured ruler and are quantized to tenths. Decoys are
//! placed by rejection sampling with a bounded number of attempts per slot;
//! a slot that runs out of attempts gets an evenly spaced fallback value.
//! Fallback values are not re-checked for spacing, so a round that needed
//! them may contain candidates closer than the minimum distance.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GameConfig;
use crate::model::{Candidate, CandidateId, MATCH_TOLERANCE};
use crate::ruler::position_of;

/// Rounds to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A decoy value and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoy {
    pub value: f64,
    pub from_fallback: bool,
}

/// Shuffled candidates for one round.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    pub candidates: Vec<Candidate>,
    pub used_fallback: bool,
}

pub struct ValueGenerator<'a> {
    config: &'a GameConfig,
}

impl<'a> ValueGenerator<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Uniform value on the ruler, rounded to a tenth.
    pub fn generate_target<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let raw = self.config.start_value() + rng.random::<f64>() * self.config.span();
        round_to_tenth(raw)
    }

    /// Places `decoy_count` decoys around `correct`.
    ///
    /// Each slot samples up to `max_attempts_per_decoy` values and keeps the
    /// first that is at least `min_distance` from the correct value and from
    /// every decoy placed before it.
    pub fn generate_decoys<R: Rng + ?Sized>(&self, correct: f64, rng: &mut R) -> Vec<Decoy> {
        let count = self.config.decoy_count();
        let min_distance = self.config.min_distance();
        let mut decoys: Vec<Decoy> = Vec::with_capacity(count);

        for slot in 0..count {
            let mut placed = None;
            for _ in 0..self.config.max_attempts_per_decoy() {
                let candidate = self.generate_target(rng);
                if (candidate - correct).abs() < min_distance {
                    continue;
                }
                let crowded = decoys
                    .iter()
                    .any(|decoy| (candidate - decoy.value).abs() < min_distance);
                if !crowded {
                    placed = Some(candidate);
                    break;
                }
            }

            let decoy = match placed {
                Some(value) => Decoy {
                    value,
                    from_fallback: false,
                },
                None => {
                    let value = self.fallback_value(slot, count);
                    tracing::debug!(slot, value, correct, "decoy placement fell back");
                    Decoy {
                        value,
                        from_fallback: true,
                    }
                }
            };
            decoys.push(decoy);
        }

        decoys
    }

    /// Evenly spaced slot value used when sampling gives up.
    #[must_use]
    pub fn fallback_value(&self, slot: usize, count: usize) -> f64 {
        let start = self.config.start_value();
        let step = self.config.span() / (count as f64 + 1.0);
        round_to_tenth(start + (slot as f64 + 1.0) * step)
    }

    /// Builds the shuffled candidate list for a round with the given target.
    ///
    /// A candidate is correct when its value matches the target within
    /// [`MATCH_TOLERANCE`]. Sampled decoys never do, but a fallback decoy
    /// can land on the target's value; that round then has two correct
    /// candidates and is flagged through `used_fallback`.
    pub fn candidates_for<R: Rng + ?Sized>(&self, target: f64, rng: &mut R) -> CandidateSet {
        let decoys = self.generate_decoys(target, rng);
        let used_fallback = decoys.iter().any(|decoy| decoy.from_fallback);

        let mut values: Vec<f64> = Vec::with_capacity(decoys.len() + 1);
        values.push(target);
        values.extend(decoys.iter().map(|decoy| decoy.value));
        values.shuffle(rng);

        let candidates = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let id = CandidateId::new(u32::try_from(index).unwrap_or(u32::MAX));
                let is_correct = (value - target).abs() < MATCH_TOLERANCE;
                Candidate::new(id, value, is_correct, position_of(self.config, value))
            })
            .collect();

        CandidateSet {
            candidates,
            used_fallback,
        }
    }
}
