//! Schedule editor draft state and display formatting.
//!
//! # Responsibility
//! - Model the picker interaction where dates and time-of-day are chosen
//!   separately and merged into one instant.
//! - Provide the short date formats used by list rows and editor buttons.
//!
//! # Invariants
//! - Picking a date keeps the previously picked time-of-day.
//! - Picking a time rewrites the time-of-day of every date already picked.

use crate::service::schedule_service::NewSchedule;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for an incomplete draft being turned into a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// A required field has not been filled in yet.
    MissingField(&'static str),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
        }
    }
}

impl Error for DraftError {}

/// In-progress schedule editor state.
///
/// Date and time are picked through separate controls; this type owns the
/// merge rules so the grouping and service layers only ever see finished
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub title: String,
    pub description: String,
    due_date: Option<NaiveDateTime>,
    end_date: Option<NaiveDateTime>,
    time: Option<NaiveTime>,
}

impl ScheduleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the due day, carrying over any previously picked time-of-day.
    pub fn pick_due_date(&mut self, day: NaiveDate) {
        self.due_date = Some(self.merge_day(day));
    }

    /// Sets the end day, carrying over any previously picked time-of-day.
    pub fn pick_end_date(&mut self, day: NaiveDate) {
        self.end_date = Some(self.merge_day(day));
    }

    /// Sets the time-of-day and rewrites it onto both picked dates.
    pub fn pick_time(&mut self, time: NaiveTime) {
        self.time = Some(time);
        if let Some(due) = self.due_date {
            self.due_date = Some(due.date().and_time(time));
        }
        if let Some(end) = self.end_date {
            self.end_date = Some(end.date().and_time(time));
        }
    }

    pub fn due_date(&self) -> Option<NaiveDateTime> {
        self.due_date
    }

    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.end_date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Turns the draft into a create request in storage form.
    ///
    /// Title, description, due date and time must all be present; the end
    /// date is display-only and not persisted.
    pub fn into_request(self) -> Result<NewSchedule, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingField("description"));
        }
        let due = self.due_date.ok_or(DraftError::MissingField("due date"))?;
        let time = self.time.ok_or(DraftError::MissingField("time"))?;

        Ok(NewSchedule {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: due.date().format("%Y-%m-%d").to_string(),
            time: time.format("%H:%M").to_string(),
        })
    }

    fn merge_day(&self, day: NaiveDate) -> NaiveDateTime {
        match self.time {
            Some(time) => day.and_time(time),
            None => day.and_time(NaiveTime::MIN),
        }
    }
}

/// Formats a day as `dd/mm`, the compact form list rows show.
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.day(), date.month())
}

/// Formats a day as `dd-mm-YYYY`, the form the editor buttons show.
pub fn format_full_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}
