//! Schedule use-case service.
//!
//! # Responsibility
//! - Provide schedule create/update/complete/get/list/delete APIs.
//! - Enforce the editor's required-field and format rules before storage.
//!
//! # Invariants
//! - Title, description, date and time are all required on create/update.
//! - `date` must parse as `YYYY-MM-DD` and `time` as `HH:MM`.
//! - Updating requires a storage-assigned id.

use crate::model::schedule::{Schedule, ScheduleId};
use crate::repo::schedule_repo::ScheduleRepository;
use crate::repo::{RepoError, RepoResult};
use chrono::{NaiveDate, NaiveTime};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for schedule use-cases.
#[derive(Debug)]
pub enum ScheduleServiceError {
    /// A required field is blank.
    MissingField(&'static str),
    /// `date` is not a valid `YYYY-MM-DD` value.
    InvalidDate(String),
    /// `time` is not a valid `HH:MM` value.
    InvalidTime(String),
    /// Update was attempted on a schedule that was never saved.
    MissingScheduleId,
    /// Target schedule does not exist.
    ScheduleNotFound(ScheduleId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ScheduleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidDate(value) => write!(f, "invalid schedule date `{value}`"),
            Self::InvalidTime(value) => write!(f, "invalid schedule time `{value}`"),
            Self::MissingScheduleId => write!(f, "schedule id is required for updating"),
            Self::ScheduleNotFound(id) => write!(f, "schedule not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent schedule state: {details}"),
        }
    }
}

impl Error for ScheduleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ScheduleServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::ScheduleNotFound(id),
            RepoError::MissingId(_) => Self::MissingScheduleId,
            other => Self::Repo(other),
        }
    }
}

/// Validated editor input for creating a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSchedule {
    pub title: String,
    pub description: String,
    /// Scheduled calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Scheduled time of day, `HH:MM`.
    pub time: String,
}

/// Schedule service facade over repository implementations.
pub struct ScheduleService<R: ScheduleRepository> {
    repo: R,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one pending schedule from validated editor input.
    pub fn create_schedule(&self, request: NewSchedule) -> Result<Schedule, ScheduleServiceError> {
        validate_fields(
            &request.title,
            &request.description,
            &request.date,
            &request.time,
        )?;

        let schedule = Schedule {
            id: None,
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            date: request.date.trim().to_string(),
            time: request.time.trim().to_string(),
            completed: false,
        };

        let id = self.repo.insert_schedule(&schedule)?;
        info!("event=schedule_create module=service status=ok id={id}");
        self.repo
            .get_schedule(id)?
            .ok_or(ScheduleServiceError::InconsistentState(
                "created schedule not found in read-back",
            ))
    }

    /// Replaces every field of an existing schedule.
    pub fn update_schedule(&self, schedule: &Schedule) -> Result<Schedule, ScheduleServiceError> {
        let id = schedule.id.ok_or(ScheduleServiceError::MissingScheduleId)?;
        validate_fields(
            &schedule.title,
            &schedule.description,
            &schedule.date,
            &schedule.time,
        )?;

        self.repo.update_schedule(schedule)?;
        info!("event=schedule_update module=service status=ok id={id}");
        self.repo
            .get_schedule(id)?
            .ok_or(ScheduleServiceError::InconsistentState(
                "updated schedule not found in read-back",
            ))
    }

    /// Marks one schedule as completed.
    pub fn complete_schedule(&self, id: ScheduleId) -> Result<Schedule, ScheduleServiceError> {
        self.repo.set_completed(id, true)?;
        info!("event=schedule_complete module=service status=ok id={id}");
        self.repo
            .get_schedule(id)?
            .ok_or(ScheduleServiceError::InconsistentState(
                "completed schedule not found in read-back",
            ))
    }

    /// Gets one schedule by stable id.
    pub fn get_schedule(&self, id: ScheduleId) -> RepoResult<Option<Schedule>> {
        self.repo.get_schedule(id)
    }

    /// Lists schedules, most recent date first.
    pub fn list_schedules(&self) -> RepoResult<Vec<Schedule>> {
        self.repo.list_schedules()
    }

    /// Lists only schedules that are not completed.
    pub fn list_pending_schedules(&self) -> RepoResult<Vec<Schedule>> {
        Ok(self
            .repo
            .list_schedules()?
            .into_iter()
            .filter(Schedule::is_pending)
            .collect())
    }

    /// Removes one schedule permanently.
    pub fn delete_schedule(&self, id: ScheduleId) -> Result<(), ScheduleServiceError> {
        self.repo.delete_schedule(id)?;
        info!("event=schedule_delete module=service status=ok id={id}");
        Ok(())
    }
}

fn validate_fields(
    title: &str,
    description: &str,
    date: &str,
    time: &str,
) -> Result<(), ScheduleServiceError> {
    if title.trim().is_empty() {
        return Err(ScheduleServiceError::MissingField("title"));
    }
    if description.trim().is_empty() {
        return Err(ScheduleServiceError::MissingField("description"));
    }
    if date.trim().is_empty() {
        return Err(ScheduleServiceError::MissingField("date"));
    }
    if time.trim().is_empty() {
        return Err(ScheduleServiceError::MissingField("time"));
    }
    if NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").is_err() {
        return Err(ScheduleServiceError::InvalidDate(date.trim().to_string()));
    }
    if NaiveTime::parse_from_str(time.trim(), "%H:%M").is_err() {
        return Err(ScheduleServiceError::InvalidTime(time.trim().to_string()));
    }
    Ok(())
}
