//! Wall-clock time source.
//!
//! The clock face depends on an injected time provider rather than reading
//! ambient time directly, so tests can supply fixed timestamps.

use chrono::{Local, NaiveTime};

/// Source of the current local time of day.
///
/// A clock read cannot fail by contract; if the host clock is unavailable
/// the whole process is considered unavailable.
pub trait WallClock {
    fn now(&self) -> NaiveTime;
}

/// Production time source reading the host's local calendar time.
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Fixed time source for deterministic tests.
#[cfg(test)]
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub NaiveTime);

#[cfg(test)]
impl WallClock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
