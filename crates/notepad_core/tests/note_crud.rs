use notepad_core::db::open_db_in_memory;
use notepad_core::{
    parse_timestamp, NoteDraft, NoteService, NoteServiceError, SqliteNoteRepository,
};
use rusqlite::params;

fn draft(title: &str, content: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
        ..NoteDraft::default()
    }
}

#[test]
fn create_note_assigns_id_and_stamps_both_timestamps() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note(draft("Groceries", "milk, eggs")).unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.created_at, created.updated_at);
    assert!(parse_timestamp(&created.created_at).is_some());
}

#[test]
fn create_note_trims_title_and_content() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note(draft("  Title  ", "  body  ")).unwrap();
    assert_eq!(created.title, "Title");
    assert_eq!(created.content, "body");
}

#[test]
fn create_note_rejects_fully_empty_input() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.create_note(draft("   ", "")).unwrap_err();
    assert!(matches!(err, NoteServiceError::EmptyNote));
}

#[test]
fn update_note_replaces_content_and_restamps_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let created = service.create_note(draft("Title", "first")).unwrap();
    let id = created.id.unwrap();

    // Backdate the stored stamps so the restamp is observable.
    conn.execute(
        "UPDATE notes SET created_at = ?1, updated_at = ?1 WHERE id = ?2;",
        params!["2020-01-01T00:00:00.000", id],
    )
    .unwrap();

    let updated = service.update_note(id, draft("Title", "second")).unwrap();
    assert_eq!(updated.content, "second");
    assert_eq!(updated.created_at, "2020-01-01T00:00:00.000");
    assert_ne!(updated.updated_at, updated.created_at);
}

#[test]
fn update_missing_note_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.update_note(999, draft("x", "y")).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(999)));
}

#[test]
fn list_notes_orders_by_creation_descending() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let first = service.create_note(draft("first", "a")).unwrap();
    let second = service.create_note(draft("second", "b")).unwrap();

    conn.execute(
        "UPDATE notes SET created_at = '2025-06-01T08:00:00.000' WHERE id = ?1;",
        params![first.id.unwrap()],
    )
    .unwrap();
    conn.execute(
        "UPDATE notes SET created_at = '2025-06-02T08:00:00.000' WHERE id = ?1;",
        params![second.id.unwrap()],
    )
    .unwrap();

    let listed = service.list_notes().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "second");
    assert_eq!(listed[1].title, "first");
}

#[test]
fn delete_note_removes_row_and_missing_delete_errors() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let created = service.create_note(draft("gone soon", "x")).unwrap();
    let id = created.id.unwrap();

    service.delete_note(id).unwrap();
    assert!(service.get_note(id).unwrap().is_none());

    let err = service.delete_note(id).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(_)));
}

#[test]
fn attachment_uris_round_trip_through_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service
        .create_note(NoteDraft {
            title: "voice memo".to_string(),
            content: "see attachment".to_string(),
            image_uri: Some("file:///img/cover.png".to_string()),
            audio_uri: Some("file:///audio/memo.m4a".to_string()),
        })
        .unwrap();

    let loaded = service.get_note(created.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.image_uri.as_deref(), Some("file:///img/cover.png"));
    assert_eq!(loaded.audio_uri.as_deref(), Some("file:///audio/memo.m4a"));
}
