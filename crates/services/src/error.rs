//! Shared error types for the services crate.

use thiserror::Error;

use mole_core::model::{CandidateId, RoundId};

/// Reasons a click is dropped by the round engine.
///
/// None of these reach the presentation layer; session state is left
/// untouched whenever one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("no session is running")]
    NotPlaying,
    #[error("no round is waiting for an answer")]
    NoActiveRound,
    #[error("round {0} was already answered")]
    AlreadyAnswered(RoundId),
    #[error("round {round} has no candidate {candidate}")]
    UnknownCandidate {
        round: RoundId,
        candidate: CandidateId,
    },
}
