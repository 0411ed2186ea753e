//! Locale seam for weekday and month labels.

use chrono::NaiveDate;

/// Supplies full weekday and month names for section labels.
///
/// Grouping never reads process locale state; callers wanting localized
/// headings provide their own implementation.
pub trait DateNames {
    /// Full weekday name for the given calendar day, e.g. `Monday`.
    fn weekday_name(&self, date: NaiveDate) -> String;
    /// Full month name for the given calendar day, e.g. `March`.
    fn month_name(&self, date: NaiveDate) -> String;
}

/// Default English names, matching chrono's built-in formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNames;

impl DateNames for EnglishNames {
    fn weekday_name(&self, date: NaiveDate) -> String {
        date.format("%A").to_string()
    }

    fn month_name(&self, date: NaiveDate) -> String {
        date.format("%B").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{DateNames, EnglishNames};
    use chrono::NaiveDate;

    #[test]
    fn english_names_render_full_words() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(EnglishNames.weekday_name(day), "Thursday");
        assert_eq!(EnglishNames.month_name(day), "June");
    }
}
