//! Recency bucketing of timestamped records.
//!
//! # Responsibility
//! - Classify records into "Today" / "Yesterday" / weekday / month sections
//!   relative to an injected `now`.
//! - Order sections and their members for direct rendering.
//!
//! # Invariants
//! - Day-boundary comparisons use midnight-truncated calendar days, never
//!   raw instants, so time-of-day cannot split a day into two buckets.
//! - A record dated today *or later* is classified "Today"; there is no
//!   separate upcoming bucket.
//! - Records whose timestamp cannot be parsed go to the "Unknown" section,
//!   which always sorts after every dated section.

use crate::grouping::names::{DateNames, EnglishNames};
use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::Ordering;

/// Section heading for records dated today or in the future.
pub const LABEL_TODAY: &str = "Today";
/// Section heading for records dated exactly one day back.
pub const LABEL_YESTERDAY: &str = "Yesterday";
/// Fallback section heading for records with a malformed timestamp.
pub const LABEL_UNKNOWN: &str = "Unknown";

// Fixed heading order for the pinned sections. The classifier emits weekday
// names for the 2-7 day range, so "Previous 7 Days" never appears in output;
// it stays pinned here so a heading with that name would still sort ahead of
// dated sections.
const PINNED_LABELS: [&str; 3] = [LABEL_TODAY, LABEL_YESTERDAY, "Previous 7 Days"];

/// A record that can be placed on a recency timeline.
pub trait Timestamped {
    /// The single instant used for recency comparison, or `None` when the
    /// stored timestamp cannot be interpreted.
    fn effective_timestamp(&self) -> Option<NaiveDateTime>;
}

/// One labeled, ordered section of the grouped output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<T> {
    /// Section heading, e.g. `Today` or `March 2023`.
    pub label: String,
    /// Members ordered by effective timestamp descending.
    pub members: Vec<T>,
}

/// Groups records into ordered recency sections relative to `now`.
///
/// The result covers every input record exactly once. Sections appear in
/// display order: pinned headings first ("Today" then "Yesterday"), then
/// remaining sections by the timestamp of their most recent member, with
/// "Unknown" last. The empty input yields an empty vector.
pub fn group_by_recency<T: Timestamped>(
    records: Vec<T>,
    now: NaiveDateTime,
    names: &dyn DateNames,
) -> Vec<Group<T>> {
    let today = now.date();
    let yesterday = today - Days::new(1);
    let seven_days_ago = today - Days::new(7);

    // Pre-sort descending; the partition below is stable, so this single
    // sort also fixes the order inside every section. Records without a
    // usable timestamp sink to the end.
    let mut stamped: Vec<(Option<NaiveDateTime>, T)> = records
        .into_iter()
        .map(|record| (record.effective_timestamp(), record))
        .collect();
    stamped.sort_by(|a, b| b.0.cmp(&a.0));

    // Each bucket remembers the timestamp of its first (most recent) member
    // as the representative used for section ordering.
    let mut sections: Vec<(Option<NaiveDateTime>, Group<T>)> = Vec::new();
    for (stamp, record) in stamped {
        let label = match stamp {
            Some(instant) => classify(instant, today, yesterday, seven_days_ago, names),
            None => LABEL_UNKNOWN.to_string(),
        };
        match sections
            .iter()
            .position(|(_, section)| section.label == label)
        {
            Some(index) => sections[index].1.members.push(record),
            None => sections.push((
                stamp,
                Group {
                    label,
                    members: vec![record],
                },
            )),
        }
    }

    // Stable sort: sections sharing a representative timestamp keep their
    // first-seen relative order.
    sections.sort_by(|a, b| compare_sections(&a.1.label, a.0, &b.1.label, b.0));
    sections.into_iter().map(|(_, section)| section).collect()
}

/// Groups records against the live local clock with English labels.
pub fn group_by_recency_now<T: Timestamped>(records: Vec<T>) -> Vec<Group<T>> {
    group_by_recency(records, Local::now().naive_local(), &EnglishNames)
}

/// Keeps only members matching `keep`, dropping sections that empty out.
///
/// Transient per-item display state (a completed schedule pending removal,
/// for example) is applied here as a projection over grouped output instead
/// of being folded into the grouping pass itself.
pub fn retain_members<T, F>(groups: Vec<Group<T>>, mut keep: F) -> Vec<Group<T>>
where
    F: FnMut(&T) -> bool,
{
    groups
        .into_iter()
        .filter_map(|mut group| {
            group.members.retain(&mut keep);
            (!group.members.is_empty()).then_some(group)
        })
        .collect()
}

/// Parses a stored timestamp into a naive local instant.
///
/// Accepted forms, tried in order:
/// - RFC 3339 (`2025-06-10T08:00:00Z`, offset preserved as written wall time)
/// - `YYYY-MM-DDTHH:MM:SS[.fff]` and the space-separated variant
/// - bare `YYYY-MM-DD`, interpreted as local midnight
///
/// Returns `None` for anything else, including blank input.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn classify(
    instant: NaiveDateTime,
    today: NaiveDate,
    yesterday: NaiveDate,
    seven_days_ago: NaiveDate,
    names: &dyn DateNames,
) -> String {
    let day = instant.date();
    if day >= today {
        LABEL_TODAY.to_string()
    } else if day >= yesterday {
        LABEL_YESTERDAY.to_string()
    } else if day >= seven_days_ago {
        names.weekday_name(day)
    } else {
        let month = names.month_name(day);
        if day.year() != today.year() {
            format!("{month} {}", day.year())
        } else {
            month
        }
    }
}

fn compare_sections(
    label_a: &str,
    stamp_a: Option<NaiveDateTime>,
    label_b: &str,
    stamp_b: Option<NaiveDateTime>,
) -> Ordering {
    let pinned_a = PINNED_LABELS.iter().position(|label| *label == label_a);
    let pinned_b = PINNED_LABELS.iter().position(|label| *label == label_b);
    match (pinned_a, pinned_b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        // Most recently active section first; `None` (Unknown) sorts last.
        (None, None) => stamp_b.cmp(&stamp_a),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, parse_timestamp};
    use crate::grouping::names::EnglishNames;
    use chrono::{Days, NaiveDate, NaiveDateTime};

    fn at(date: &str, time: &str) -> NaiveDateTime {
        parse_timestamp(&format!("{date}T{time}:00")).unwrap()
    }

    fn label_for(instant: NaiveDateTime, now: NaiveDateTime) -> String {
        let today = now.date();
        classify(
            instant,
            today,
            today - Days::new(1),
            today - Days::new(7),
            &EnglishNames,
        )
    }

    #[test]
    fn classify_handles_each_recency_band() {
        let now = at("2025-06-10", "12:00");
        assert_eq!(label_for(at("2025-06-10", "00:00"), now), "Today");
        assert_eq!(label_for(at("2025-06-09", "23:59"), now), "Yesterday");
        assert_eq!(label_for(at("2025-06-05", "08:00"), now), "Thursday");
        assert_eq!(label_for(at("2025-01-01", "08:00"), now), "January");
        assert_eq!(label_for(at("2023-03-15", "08:00"), now), "March 2023");
    }

    #[test]
    fn classify_puts_future_records_under_today() {
        let now = at("2025-06-10", "12:00");
        assert_eq!(label_for(at("2025-06-11", "09:00"), now), "Today");
        assert_eq!(label_for(at("2026-01-01", "00:00"), now), "Today");
    }

    #[test]
    fn seven_day_boundary_is_inclusive() {
        let now = at("2025-06-10", "12:00");
        // Exactly seven days back still gets a weekday name.
        assert_eq!(label_for(at("2025-06-03", "00:00"), now), "Tuesday");
        // One day older falls through to the month label.
        assert_eq!(label_for(at("2025-06-02", "23:59"), now), "June");
    }

    #[test]
    fn parse_timestamp_accepts_stored_forms() {
        assert!(parse_timestamp("2025-06-10T08:00:00.000Z").is_some());
        assert!(parse_timestamp("2025-06-10T08:00:00").is_some());
        assert!(parse_timestamp("2025-06-10 08:00:00").is_some());
        let midnight = parse_timestamp("2025-06-10").unwrap();
        assert_eq!(
            midnight.date(),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
        );
        assert_eq!(midnight.time().format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2025-13-40"), None);
    }
}
