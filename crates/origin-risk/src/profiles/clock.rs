use chrono::{Datelike, Utc};

/// Source of the calendar year used when judging vehicle age.
pub trait CalendarClock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Reads the wall clock in UTC on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl CalendarClock for SystemClock {
    fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}

/// Pins scoring to a single year, for reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYearClock(pub i32);

impl CalendarClock for FixedYearClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
