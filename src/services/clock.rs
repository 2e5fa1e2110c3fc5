//! Time source for registration timestamps and "today" queries.

use chrono::{DateTime, Local};

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
