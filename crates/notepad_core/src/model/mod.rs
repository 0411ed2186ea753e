//! Domain records for notes, schedules and tasks.
//!
//! # Responsibility
//! - Define the plain records persisted in local storage.
//! - Keep timestamp fields in the textual form storage uses, so parsing
//!   stays an explicit, fallible step owned by the grouping layer.
//!
//! # Invariants
//! - `id` is `None` until storage assigns a rowid on insert.
//! - Note timestamps are ISO-8601 text; schedule/task dates are `YYYY-MM-DD`.

pub mod layout;
pub mod note;
pub mod schedule;
pub mod task;
