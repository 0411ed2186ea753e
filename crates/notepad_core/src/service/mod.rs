//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own input validation and timestamp stamping so UI layers stay thin.

pub mod note_service;
pub mod schedule_service;

use chrono::Local;

/// Current local wall-clock instant in the stored timestamp format.
///
/// No offset is recorded; stored timestamps are wall time as the writer
/// saw it, which is also how the recency grouper interprets them.
pub(crate) fn current_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::current_timestamp;
    use crate::grouping::temporal::parse_timestamp;

    #[test]
    fn current_timestamp_is_parseable() {
        assert!(parse_timestamp(&current_timestamp()).is_some());
    }
}
