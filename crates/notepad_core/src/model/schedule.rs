//! Schedule domain record.

use crate::grouping::temporal::{parse_timestamp, Timestamped};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Storage-assigned rowid for schedules.
pub type ScheduleId = i64;

/// A dated entry with a completion flag.
///
/// `date` and `time` are kept as the textual forms the editor writes
/// (`YYYY-MM-DD` and `HH:MM`). Recency grouping uses the date only, so two
/// schedules on the same calendar day always land in the same bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assigned by storage on insert; `None` for unsaved drafts.
    pub id: Option<ScheduleId>,
    pub title: String,
    pub description: String,
    /// Scheduled calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Scheduled time of day, `HH:MM`.
    pub time: String,
    pub completed: bool,
}

impl Schedule {
    /// Returns whether this schedule should still be shown in active lists.
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

impl Timestamped for Schedule {
    /// Scheduled day at local midnight. Time-of-day is deliberately not
    /// merged in; bucketing compares calendar days only.
    fn effective_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }
}
