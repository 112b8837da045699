#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod ports;
pub mod recording;
pub mod timers;

pub use mole_core::Clock;

pub use engine::{AnswerOutcome, RoundEngine, RoundPhase};
pub use error::EngineError;
pub use ports::{AudioSink, Cue, NullAudio, Presenter, RenderedCandidate};
pub use recording::{PresenterEvent, RecordingAudio, RecordingPresenter};
