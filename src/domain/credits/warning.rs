//! Session-scoped warning state.
//!
//! Ensures each warning class fires at most once per calendar day and
//! keeps a rolling count of consecutive limit days. An explicit record
//! independent of any UI lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CreditVerdict;

/// Which warning, if any, to surface for an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Usage entered the 80-100% band.
    Soft,
    /// The daily limit was reached.
    Limit,
}

/// Per-user warning flags for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningSessionState {
    /// Day the flags apply to.
    pub date: NaiveDate,
    /// Soft warning already surfaced today.
    pub soft_shown: bool,
    /// Hard (limit) warning already surfaced today.
    pub hard_shown: bool,
    /// Consecutive days ending with the limit hit.
    pub consecutive_limit_days: u32,
}

impl WarningSessionState {
    /// Fresh state for a day, nothing shown yet.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            soft_shown: false,
            hard_shown: false,
            consecutive_limit_days: 0,
        }
    }

    /// Applies the date rollover if the stored day has passed.
    ///
    /// The streak counter increments when the previous tracked day ended
    /// with the limit hit and that day was yesterday; a skipped day in
    /// between breaks the streak.
    pub fn roll_over_if_stale(&mut self, today: NaiveDate) {
        if self.date == today {
            return;
        }
        let was_yesterday = self.date.succ_opt() == Some(today);
        self.consecutive_limit_days = if self.hard_shown && was_yesterday {
            self.consecutive_limit_days + 1
        } else {
            0
        };
        self.soft_shown = false;
        self.hard_shown = false;
        self.date = today;
    }

    /// Decides whether a warning should surface for this verdict.
    ///
    /// Premium accounts never warn. Each class fires at most once per day
    /// no matter how many messages are sent.
    pub fn observe(&mut self, verdict: &CreditVerdict, premium: bool) -> Option<WarningKind> {
        if premium {
            return None;
        }
        if verdict.is_limit_reached && !self.hard_shown {
            self.hard_shown = true;
            return Some(WarningKind::Limit);
        }
        if verdict.show_soft_warning && !self.soft_shown {
            self.soft_shown = true;
            return Some(WarningKind::Soft);
        }
        None
    }
}
