//! Clock adapters.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};

use crate::ports::Clock;

/// Wall-clock implementation, UTC reference timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for tests.
///
/// Rollover logic is exercised by advancing the day explicitly instead
/// of waiting for midnight.
#[derive(Debug)]
pub struct ManualClock {
    today: Mutex<NaiveDate>,
}

impl ManualClock {
    /// Creates a clock pinned to a day.
    pub fn starting_at(today: NaiveDate) -> Self {
        Self { today: Mutex::new(today) }
    }

    /// Moves the clock forward by whole days.
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.lock().unwrap();
        *today += chrono::Duration::days(days as i64);
    }

    /// Pins the clock to a specific day.
    pub fn set_today(&self, day: NaiveDate) {
        *self.today.lock().unwrap() = day;
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }

    fn now(&self) -> DateTime<Utc> {
        self.today()
            .and_hms_opt(12, 0, 0)
            .expect("noon is always a valid time")
            .and_utc()
    }
}
