//! Office clock
//!
//! Wall-clock time with an adjustable offset, so grace periods can be
//! exercised without waiting for them.

use chrono::{Duration, Local, NaiveDateTime};
use tracing::debug;

/// Local time source used for occupancy and booking timestamps
#[derive(Debug, Clone)]
pub struct TimeManager {
    /// Amount added to the wall clock on every reading
    offset: Duration,
}

impl TimeManager {
    /// Create a time manager that follows the wall clock
    pub fn new() -> Self {
        Self { offset: Duration::zero() }
    }

    /// Get the current office time
    pub fn now(&self) -> NaiveDateTime {
        Local::now().naive_local() + self.offset
    }

    /// Advance office time by a specific duration
    pub fn advance_by(&mut self, duration: Duration) {
        self.offset = self.offset + duration;
        debug!(offset = %self.offset, "Advanced office time by {}", duration);
    }

    /// Total amount office time runs ahead of the wall clock
    pub fn offset(&self) -> Duration {
        self.offset
    }

    /// Check whether strictly more than `grace` has passed since `since`
    pub fn has_elapsed(&self, since: NaiveDateTime, grace: Duration) -> bool {
        self.now() > since + grace
    }
}

impl Default for TimeManager {
    fn default() -> Self {
        Self::new()
    }
}
