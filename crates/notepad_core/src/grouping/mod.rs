//! Recency grouping for chronological list screens.
//!
//! # Responsibility
//! - Turn a flat collection of timestamped records into ordered, labeled
//!   sections ("Today", "Yesterday", weekday names, month names).
//! - Keep label text generation behind a locale seam so grouping stays
//!   deterministic under test.
//!
//! # Invariants
//! - Grouping is a pure function of `(records, now)`; no storage access.
//! - Every input record lands in exactly one output group.
//! - Members inside a group are ordered most-recent first.

pub mod names;
pub mod temporal;
