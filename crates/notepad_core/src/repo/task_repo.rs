//! Task repository contract and SQLite implementation.
//!
//! Tasks have no editor flow yet, so only the minimal persistence surface
//! exists: insert, list, delete.

use crate::model::task::{Task, TaskId};
use crate::repo::{parse_completed, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for task operations.
pub trait TaskRepository {
    /// Inserts one task and returns the storage-assigned id.
    fn insert_task(&self, task: &Task) -> RepoResult<TaskId>;
    /// Lists all tasks, most recent date first.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Removes one task permanently.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert_task(&self, task: &Task) -> RepoResult<TaskId> {
        self.conn.execute(
            "INSERT INTO tasks (
                title,
                description,
                date,
                time,
                completed
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                task.title.as_str(),
                task.description.as_str(),
                task.date.as_str(),
                task.time.as_str(),
                i64::from(task.completed),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, date, time, completed
             FROM tasks
             ORDER BY date DESC, id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "task", id });
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    Ok(Task {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        description: row.get("description")?,
        date: row.get("date")?,
        time: row.get("time")?,
        completed: parse_completed(row.get("completed")?, "tasks")?,
    })
}
