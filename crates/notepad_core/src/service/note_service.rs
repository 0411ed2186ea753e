//! Note use-case service.
//!
//! # Responsibility
//! - Provide note create/update/get/list/delete APIs.
//! - Stamp creation/update timestamps in storage form.
//! - Derive plain-text snippets from marked-up note content for list rows.
//!
//! # Invariants
//! - Updates use full content replacement semantics and always restamp
//!   `updated_at`.
//! - A note must carry a non-blank title or body; fully empty notes are
//!   rejected before touching storage.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::current_timestamp;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SNIPPET_MAX_CHARS: usize = 100;

static MARKUP_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKUP_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKUP_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markup symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Both title and body are blank.
    EmptyNote,
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNote => write!(f, "note needs a title or content"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Editor input for creating or replacing a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub image_uri: Option<String>,
    pub audio_uri: Option<String>,
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note, stamping both timestamps with the current instant.
    pub fn create_note(&self, draft: NoteDraft) -> Result<Note, NoteServiceError> {
        validate_draft(&draft)?;

        let mut note = Note::new(draft.title.trim(), draft.content.trim(), current_timestamp());
        note.image_uri = draft.image_uri;
        note.audio_uri = draft.audio_uri;

        let id = self.repo.insert_note(&note)?;
        info!("event=note_create module=service status=ok id={id}");
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    /// Replaces note content fully and restamps `updated_at`.
    pub fn update_note(&self, id: NoteId, draft: NoteDraft) -> Result<Note, NoteServiceError> {
        validate_draft(&draft)?;

        let mut note = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        note.title = draft.title.trim().to_string();
        note.content = draft.content.trim().to_string();
        note.image_uri = draft.image_uri;
        note.audio_uri = draft.audio_uri;
        note.updated_at = current_timestamp();

        self.repo.update_note(&note)?;
        info!("event=note_update module=service status=ok id={id}");
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "updated note not found in read-back",
            ))
    }

    /// Gets one note by stable id.
    pub fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.repo.get_note(id)
    }

    /// Lists notes, newest creation first.
    pub fn list_notes(&self) -> RepoResult<Vec<Note>> {
        self.repo.list_notes()
    }

    /// Removes one note permanently.
    pub fn delete_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.delete_note(id)?;
        info!("event=note_delete module=service status=ok id={id}");
        Ok(())
    }
}

fn validate_draft(draft: &NoteDraft) -> Result<(), NoteServiceError> {
    if draft.title.trim().is_empty() && draft.content.trim().is_empty() {
        return Err(NoteServiceError::EmptyNote);
    }
    Ok(())
}

/// Derives a plain-text list snippet from marked-up note content.
///
/// Rules:
/// - inline images are removed, links reduce to their text,
/// - markup symbols are stripped and whitespace collapsed,
/// - the first 100 characters are retained.
///
/// Returns `None` when nothing displayable remains.
pub fn note_snippet(content: &str) -> Option<String> {
    let without_images = MARKUP_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKUP_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKUP_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(SNIPPET_MAX_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::note_snippet;

    #[test]
    fn snippet_strips_markup_and_limits_length() {
        let source = "# title\n\n- [link](https://example.com)\n**bold** `code`";
        let snippet = note_snippet(source).expect("snippet should exist");
        assert!(snippet.contains("title"));
        assert!(snippet.contains("link"));
        assert!(!snippet.contains('#'));
        assert!(!snippet.contains('*'));
        assert!(snippet.chars().count() <= 100);
    }

    #[test]
    fn snippet_drops_inline_images() {
        let snippet = note_snippet("before ![alt](pic.png) after").unwrap();
        assert!(!snippet.contains("pic.png"));
        assert!(snippet.contains("before"));
        assert!(snippet.contains("after"));
    }

    #[test]
    fn snippet_is_none_for_markup_only_content() {
        assert_eq!(note_snippet("![](cover.png)"), None);
        assert_eq!(note_snippet("   "), None);
    }
}
