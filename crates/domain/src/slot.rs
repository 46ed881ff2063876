//! Preferred time slots and the outcome of picking one on the results page.

use crate::calendar::DayKind;

/// Evening window tried on weekdays, in order of preference.
pub const WEEKDAY_TIMES: [&str; 5] = ["6:00pm", "6:30pm", "7:00pm", "7:30pm", "8:00pm"];

/// Morning window tried on weekends, in order of preference.
pub const WEEKEND_TIMES: [&str; 5] = ["8:00am", "8:30am", "9:00am", "9:30am", "10:00am"];

/// Ranked list of time labels, as displayed on the club's result links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferredTimes(Vec<String>);

impl PreferredTimes {
    /// The fixed window for a day classification.
    #[must_use]
    pub fn for_day(kind: DayKind) -> Self {
        let labels = match kind {
            DayKind::Weekday => WEEKDAY_TIMES,
            DayKind::Weekend => WEEKEND_TIMES,
        };
        Self(labels.iter().map(|label| (*label).to_string()).collect())
    }

    /// Labels in order of preference.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PreferredTimes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Result of walking the preferred-time list on a results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    /// The link for `time` was found and clicked.
    Selected { time: String },
    /// The page states there is nothing to book at all.
    NoAvailability,
    /// Every preferred time was tried without a match.
    NoMatchingPreferredTime,
}
