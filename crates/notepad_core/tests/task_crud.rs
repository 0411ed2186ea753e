use notepad_core::db::open_db_in_memory;
use notepad_core::{RepoError, SqliteTaskRepository, Task, TaskRepository};

fn task(title: &str, date: &str, time: &str) -> Task {
    Task {
        id: None,
        title: title.to_string(),
        description: format!("{title} details"),
        date: date.to_string(),
        time: time.to_string(),
        completed: false,
    }
}

#[test]
fn insert_task_assigns_id_and_lands_in_tasks_table() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let id = repo.insert_task(&task("Water plants", "2025-06-10", "08:00")).unwrap();
    assert!(id > 0);

    let task_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM tasks;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(task_rows, 1);

    let note_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(note_rows, 0);
}

#[test]
fn list_tasks_round_trips_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let mut stored = task("Water plants", "2025-06-10", "08:00");
    stored.completed = true;
    let id = repo.insert_task(&stored).unwrap();

    let listed = repo.list_tasks().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, Some(id));
    assert_eq!(listed[0].title, "Water plants");
    assert_eq!(listed[0].description, "Water plants details");
    assert_eq!(listed[0].date, "2025-06-10");
    assert_eq!(listed[0].time, "08:00");
    assert!(listed[0].completed);
}

#[test]
fn list_tasks_orders_by_date_desc_then_id_asc() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let older = repo.insert_task(&task("Older", "2025-06-01", "09:00")).unwrap();
    let newer = repo.insert_task(&task("Newer", "2025-06-10", "09:00")).unwrap();
    let newer_twin = repo.insert_task(&task("Newer twin", "2025-06-10", "10:00")).unwrap();

    let listed = repo.list_tasks().unwrap();
    let ids: Vec<_> = listed.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![Some(newer), Some(newer_twin), Some(older)]);
}

#[test]
fn delete_task_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let id = repo.insert_task(&task("Water plants", "2025-06-10", "08:00")).unwrap();
    repo.delete_task(id).unwrap();

    assert!(repo.list_tasks().unwrap().is_empty());
}

#[test]
fn delete_missing_task_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let err = repo.delete_task(99).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { entity: "task", id: 99 }
    ));
}
