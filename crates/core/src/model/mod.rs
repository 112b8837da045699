mod band;
mod candidate;
mod feedback;
mod ids;
mod round;
mod session;

pub use band::ScoreBand;
pub use candidate::{Candidate, MATCH_TOLERANCE};
pub use feedback::{Feedback, FeedbackKind};
pub use ids::{CandidateId, ParseIdError, RoundId};
pub use round::Round;
pub use session::{Level, Miss, Session, SessionStats, TimerTick};
