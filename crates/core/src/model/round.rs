use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::GameConfig;
use crate::generator::ValueGenerator;
use crate::model::candidate::Candidate;
use crate::model::ids::{CandidateId, RoundId};

/// One question cycle: a target value and the candidates offered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    id: RoundId,
    target: f64,
    candidates: Vec<Candidate>,
    answered: bool,
    used_fallback: bool,
    deadline: Option<DateTime<Utc>>,
}

impl Round {
    /// Draws a fresh target and its candidates.
    pub fn generate<R: Rng + ?Sized>(id: RoundId, config: &GameConfig, rng: &mut R) -> Self {
        let target = ValueGenerator::new(config).generate_target(rng);
        Self::for_target(id, target, config, rng)
    }

    /// Builds candidates around a known target.
    pub fn for_target<R: Rng + ?Sized>(
        id: RoundId,
        target: f64,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        let set = ValueGenerator::new(config).candidates_for(target, rng);
        Self {
            id,
            target,
            candidates: set.candidates,
            answered: false,
            used_fallback: set.used_fallback,
            deadline: None,
        }
    }

    /// Returns the round identifier.
    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Returns the value the player is asked to find.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns the candidates in display order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Looks up a candidate by its id in this round.
    #[must_use]
    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.get(id.index())
    }

    /// Returns the first candidate matching the target.
    #[must_use]
    pub fn correct_candidate(&self) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.is_correct())
    }

    /// True when at least one decoy came from the evenly spaced fallback, in
    /// which case the minimum spacing is not guaranteed.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    /// Returns when the answer window closes, or `None` once answered.
    #[must_use]
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Records when the answer window closes.
    pub fn arm_deadline(&mut self, at: DateTime<Utc>) {
        self.deadline = Some(at);
    }

    /// Marks the round answered. Returns `false` if it already was.
    pub fn latch_answer(&mut self) -> bool {
        if self.answered {
            return false;
        }
        self.answered = true;
        self.deadline = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sampled_rounds_have_exactly_one_correct_candidate() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..500 {
            let round = Round::generate(RoundId::new(n), &config, &mut rng);
            assert_eq!(round.candidates().len(), 5);
            let correct: Vec<_> = round.candidates().iter().filter(|c| c.is_correct()).collect();
            if !round.used_fallback() {
                assert_eq!(correct.len(), 1);
            }
            assert!(!correct.is_empty());
            assert!(correct.iter().all(|c| c.matches(round.target())));
            for candidate in round.candidates() {
                assert!((0.0..=1.0).contains(&candidate.position()));
            }
        }
    }

    #[test]
    fn sampled_rounds_keep_minimum_spacing() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(8);
        for n in 0..500 {
            let round = Round::generate(RoundId::new(n), &config, &mut rng);
            if round.used_fallback() {
                continue;
            }
            let values: Vec<f64> = round.candidates().iter().map(Candidate::value).collect();
            for (i, a) in values.iter().enumerate() {
                for b in &values[i + 1..] {
                    assert!((a - b).abs() >= 0.15);
                }
            }
        }
    }

    #[test]
    fn latch_only_succeeds_once() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(1);
        let mut round = Round::for_target(RoundId::new(1), 2.0, &config, &mut rng);
        round.arm_deadline(crate::time::test_epoch());

        assert!(round.latch_answer());
        assert!(round.deadline().is_none());
        assert!(!round.latch_answer());
    }

    #[test]
    fn lookup_by_candidate_id() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(4);
        let round = Round::for_target(RoundId::new(1), 2.3, &config, &mut rng);

        let correct = round.correct_candidate().unwrap();
        assert_eq!(round.candidate(correct.id()), Some(correct));
        assert!(round.candidate(CandidateId::new(5)).is_none());
    }
}
