//! Task domain record.
//!
//! Tasks share the schedule shape in storage but have no editor flow yet;
//! only minimal persistence exists for them.

use crate::grouping::temporal::{parse_timestamp, Timestamped};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Storage-assigned rowid for tasks.
pub type TaskId = i64;

/// A dated to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by storage on insert; `None` for unsaved drafts.
    pub id: Option<TaskId>,
    pub title: String,
    pub description: String,
    /// Due calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Due time of day, `HH:MM`.
    pub time: String,
    pub completed: bool,
}

impl Timestamped for Task {
    fn effective_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }
}
