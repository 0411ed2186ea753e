//! Core domain logic for the Notepad app.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod form;
pub mod grouping;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use form::{format_day_month, format_full_date, DraftError, ScheduleDraft};
pub use grouping::names::{DateNames, EnglishNames};
pub use grouping::temporal::{
    group_by_recency, group_by_recency_now, parse_timestamp, retain_members, Group, Timestamped,
    LABEL_TODAY, LABEL_UNKNOWN, LABEL_YESTERDAY,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::layout::LayoutMode;
pub use model::note::{Note, NoteId};
pub use model::schedule::{Schedule, ScheduleId};
pub use model::task::{Task, TaskId};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use repo::schedule_repo::{ScheduleRepository, SqliteScheduleRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::note_service::{note_snippet, NoteDraft, NoteService, NoteServiceError};
pub use service::schedule_service::{NewSchedule, ScheduleService, ScheduleServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
