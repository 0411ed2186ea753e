//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `notes` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Note list order is `created_at DESC, id ASC`; display regrouping is
//!   the caller's concern.
//! - Deletes are hard deletes; notes carry no tombstone state.

use crate::model::note::{Note, NoteId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    image_uri,
    audio_uri,
    created_at,
    updated_at
FROM notes";

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Inserts one note and returns the storage-assigned id.
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId>;
    /// Replaces every mutable field of an existing note.
    fn update_note(&self, note: &Note) -> RepoResult<()>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists all notes, newest creation first.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Removes one note permanently.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (
                title,
                content,
                image_uri,
                audio_uri,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                note.title.as_str(),
                note.content.as_str(),
                note.image_uri.as_deref(),
                note.audio_uri.as_deref(),
                note.created_at.as_str(),
                note.updated_at.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_note(&self, note: &Note) -> RepoResult<()> {
        let id = note.id.ok_or(RepoError::MissingId("note"))?;
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?1,
                content = ?2,
                image_uri = ?3,
                audio_uri = ?4,
                updated_at = ?5
             WHERE id = ?6;",
            params![
                note.title.as_str(),
                note.content.as_str(),
                note.image_uri.as_deref(),
                note.audio_uri.as_deref(),
                note.updated_at.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "note", id });
        }

        Ok(())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY created_at DESC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "note", id });
        }

        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        content: row.get("content")?,
        image_uri: row.get("image_uri")?,
        audio_uri: row.get("audio_uri")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
