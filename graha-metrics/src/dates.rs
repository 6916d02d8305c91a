//! Short date formatting for table cells.

use chrono::NaiveDate;
use graha_core::Locale;

/// Format a calendar date with the locale's short date pattern.
pub fn format_date(date: NaiveDate, locale: &Locale) -> String {
    date.format(&locale.date_format).to_string()
}

/// Format an optional date; a missing value renders the locale's
/// placeholder rather than raising.
pub fn format_short_date(date: Option<NaiveDate>, locale: &Locale) -> String {
    match date {
        Some(date) => format_date(date, locale),
        None => locale.missing_placeholder.clone(),
    }
}
