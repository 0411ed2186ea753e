//! Schedule repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD plus completion toggling over the `schedules` table.
//!
//! # Invariants
//! - List order is `date DESC, id ASC`; grouping reassigns display order.
//! - `completed` is persisted as 0/1 and rejected otherwise on read.

use crate::model::schedule::{Schedule, ScheduleId};
use crate::repo::{parse_completed, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const SCHEDULE_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    date,
    time,
    completed
FROM schedules";

/// Repository interface for schedule operations.
pub trait ScheduleRepository {
    /// Inserts one schedule and returns the storage-assigned id.
    fn insert_schedule(&self, schedule: &Schedule) -> RepoResult<ScheduleId>;
    /// Replaces every mutable field of an existing schedule.
    fn update_schedule(&self, schedule: &Schedule) -> RepoResult<()>;
    /// Gets one schedule by id.
    fn get_schedule(&self, id: ScheduleId) -> RepoResult<Option<Schedule>>;
    /// Lists all schedules, most recent date first.
    fn list_schedules(&self) -> RepoResult<Vec<Schedule>>;
    /// Sets the completion flag for one schedule.
    fn set_completed(&self, id: ScheduleId, completed: bool) -> RepoResult<()>;
    /// Removes one schedule permanently.
    fn delete_schedule(&self, id: ScheduleId) -> RepoResult<()>;
}

/// SQLite-backed schedule repository.
pub struct SqliteScheduleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteScheduleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ScheduleRepository for SqliteScheduleRepository<'_> {
    fn insert_schedule(&self, schedule: &Schedule) -> RepoResult<ScheduleId> {
        self.conn.execute(
            "INSERT INTO schedules (
                title,
                description,
                date,
                time,
                completed
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                schedule.title.as_str(),
                schedule.description.as_str(),
                schedule.date.as_str(),
                schedule.time.as_str(),
                i64::from(schedule.completed),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_schedule(&self, schedule: &Schedule) -> RepoResult<()> {
        let id = schedule.id.ok_or(RepoError::MissingId("schedule"))?;
        let changed = self.conn.execute(
            "UPDATE schedules
             SET
                title = ?1,
                description = ?2,
                date = ?3,
                time = ?4,
                completed = ?5
             WHERE id = ?6;",
            params![
                schedule.title.as_str(),
                schedule.description.as_str(),
                schedule.date.as_str(),
                schedule.time.as_str(),
                i64::from(schedule.completed),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "schedule",
                id,
            });
        }

        Ok(())
    }

    fn get_schedule(&self, id: ScheduleId) -> RepoResult<Option<Schedule>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SCHEDULE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_schedule_row(row)?));
        }

        Ok(None)
    }

    fn list_schedules(&self) -> RepoResult<Vec<Schedule>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SCHEDULE_SELECT_SQL} ORDER BY date DESC, id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut schedules = Vec::new();
        while let Some(row) = rows.next()? {
            schedules.push(parse_schedule_row(row)?);
        }

        Ok(schedules)
    }

    fn set_completed(&self, id: ScheduleId, completed: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE schedules SET completed = ?1 WHERE id = ?2;",
            params![i64::from(completed), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "schedule",
                id,
            });
        }

        Ok(())
    }

    fn delete_schedule(&self, id: ScheduleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM schedules WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "schedule",
                id,
            });
        }

        Ok(())
    }
}

fn parse_schedule_row(row: &Row<'_>) -> RepoResult<Schedule> {
    Ok(Schedule {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        description: row.get("description")?,
        date: row.get("date")?,
        time: row.get("time")?,
        completed: parse_completed(row.get("completed")?, "schedules")?,
    })
}
