//! Calendar rules: booking horizon, form date format, and day classification.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Courts open for booking this many days ahead.
pub const BOOKING_HORIZON_DAYS: u64 = 7;

/// Date format accepted by the club's `#date` field.
pub const FORM_DATE_FORMAT: &str = "%m/%d/%Y";

/// Weekday/weekend classification driving the preferred-time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    /// Classify a day of the week. Monday through Friday are weekdays.
    #[must_use]
    pub fn of(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ => Self::Weekday,
        }
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekday => f.write_str("weekday"),
            Self::Weekend => f.write_str("weekend"),
        }
    }
}

/// The date to book when running on `today`.
///
/// # Panics
///
/// Only for dates at the very end of chrono's supported range.
#[must_use]
pub fn target_date(today: NaiveDate) -> NaiveDate {
    today + Days::new(BOOKING_HORIZON_DAYS)
}

/// Render a date the way the club form expects it (`MM/DD/YYYY`).
#[must_use]
pub fn format_form_date(date: NaiveDate) -> String {
    date.format(FORM_DATE_FORMAT).to_string()
}

/// Target date for `today`, already formatted for the form.
#[must_use]
pub fn get_date(today: NaiveDate) -> String {
    format_form_date(target_date(today))
}

/// Classify `today` for preferred-time selection.
#[must_use]
pub fn day_kind(today: NaiveDate) -> DayKind {
    DayKind::of(today.weekday())
}
