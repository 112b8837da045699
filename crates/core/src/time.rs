use chrono::{DateTime, Duration, Utc};

/// Where the round engine reads "now" from.
///
/// The terminal game runs on [`Clock::System`]. Tests freeze the clock and
/// step it by hand, so deadlines and pacing delays fire at exact instants
/// without any sleeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Frozen(DateTime<Utc>),
}

impl Clock {
    /// Creates a clock that follows the system time.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Creates a clock stopped at `at`.
    #[must_use]
    pub fn frozen_at(at: DateTime<Utc>) -> Self {
        Self::Frozen(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Frozen(at) => *at,
        }
    }

    /// Steps a frozen clock forward by `delta`.
    ///
    /// The system clock cannot be steered and ignores this.
    pub fn advance(&mut self, delta: Duration) {
        match self {
            Clock::System => {}
            Clock::Frozen(at) => *at += delta,
        }
    }
}

/// Seconds since the Unix epoch at which test clocks start (2023-11-14T22:13:20Z).
pub const TEST_EPOCH_SECS: i64 = 1_700_000_000;

/// Start instant of every test clock.
///
/// # Panics
///
/// Panics if [`TEST_EPOCH_SECS`] is out of chrono's range, which it is not.
#[must_use]
pub fn test_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(TEST_EPOCH_SECS, 0).expect("test epoch should be in range")
}

/// A frozen clock at [`test_epoch`].
#[must_use]
pub fn test_clock() -> Clock {
    Clock::frozen_at(test_epoch())
}
