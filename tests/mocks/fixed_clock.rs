use chrono::{DateTime, Local, TimeZone};
use client_registry::services::Clock;
use std::sync::{Arc, Mutex};

/// Clock that returns a settable instant.
#[allow(dead_code)]
#[derive(Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

#[allow(dead_code)]
impl FixedClock {
    /// Create a clock stopped at the given local date and time.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let now = Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .expect("unambiguous local time");
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Move the clock to another instant.
    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock().unwrap() = now;
    }

    /// Move the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}
