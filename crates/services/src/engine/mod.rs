mod lifecycle;
mod outcome;
mod rounds;
mod service;

// Public API of the round engine.
pub use crate::error::EngineError;
pub use outcome::{AnswerOutcome, RoundPhase};
pub use service::RoundEngine;
