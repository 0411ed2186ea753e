//! Note domain record.

use crate::grouping::temporal::{parse_timestamp, Timestamped};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Storage-assigned rowid for notes.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// A free-form note with optional media attachments.
///
/// Timestamps are stored as ISO-8601 text, exactly as written by the editor
/// flow. They are parsed lazily for recency grouping; a malformed value is
/// tolerated and classified into the fallback bucket instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Assigned by storage on insert; `None` for unsaved drafts.
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    /// Local path of an attached image, if any.
    pub image_uri: Option<String>,
    /// Local path of an attached audio clip, if any.
    pub audio_uri: Option<String>,
    /// ISO-8601 creation instant.
    pub created_at: String,
    /// ISO-8601 last-modified instant. Equal to `created_at` until edited.
    pub updated_at: String,
}

impl Note {
    /// Creates an unsaved note stamped with the given instant.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        stamped_at: impl Into<String>,
    ) -> Self {
        let stamp = stamped_at.into();
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            image_uri: None,
            audio_uri: None,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }
}

impl Timestamped for Note {
    /// Last-modified instant, falling back to creation time when the
    /// update stamp is missing or malformed.
    fn effective_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.updated_at).or_else(|| parse_timestamp(&self.created_at))
    }
}
