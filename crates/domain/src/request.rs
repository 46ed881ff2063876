//! Reservation request — what one run tries to book.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::ValidationError;
use crate::slot::PreferredTimes;

/// Ordered duration candidates: a primary length and at most one fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u16>", into = "Vec<u16>")]
pub struct DurationPlan {
    primary: u16,
    fallback: Option<u16>,
}

impl DurationPlan {
    /// Build a plan, rejecting zero lengths and a fallback equal to the primary.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroDuration`] or
    /// [`ValidationError::DuplicateDuration`].
    pub fn new(primary: u16, fallback: Option<u16>) -> Result<Self, ValidationError> {
        if primary == 0 || fallback == Some(0) {
            return Err(ValidationError::ZeroDuration);
        }
        if fallback == Some(primary) {
            return Err(ValidationError::DuplicateDuration(primary));
        }
        Ok(Self { primary, fallback })
    }

    #[must_use]
    pub fn primary(&self) -> u16 {
        self.primary
    }

    #[must_use]
    pub fn fallback(&self) -> Option<u16> {
        self.fallback
    }

    /// Durations in the order they are attempted.
    pub fn iter(&self) -> impl Iterator<Item = u16> {
        std::iter::once(self.primary).chain(self.fallback)
    }

    /// Label the club form shows for a duration, e.g. `"120 Min"`.
    #[must_use]
    pub fn label(minutes: u16) -> String {
        format!("{minutes} Min")
    }
}

impl Default for DurationPlan {
    fn default() -> Self {
        Self {
            primary: 120,
            fallback: Some(90),
        }
    }
}

impl TryFrom<Vec<u16>> for DurationPlan {
    type Error = ValidationError;

    fn try_from(value: Vec<u16>) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [] => Err(ValidationError::NoDuration),
            [primary] => Self::new(*primary, None),
            [primary, fallback] => Self::new(*primary, Some(*fallback)),
            more => Err(ValidationError::TooManyDurations(more.len())),
        }
    }
}

impl From<DurationPlan> for Vec<u16> {
    fn from(plan: DurationPlan) -> Self {
        plan.iter().collect()
    }
}

/// Everything one run needs to know about what to book. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub target_date: NaiveDate,
    pub durations: DurationPlan,
    pub preferred_times: PreferredTimes,
    pub test_mode: bool,
}

impl ReservationRequest {
    /// Derive the request for a run happening on `today`.
    ///
    /// The preferred-time window follows `today`'s classification, not the
    /// target date's.
    #[must_use]
    pub fn for_today(today: NaiveDate, durations: DurationPlan, test_mode: bool) -> Self {
        Self {
            target_date: calendar::target_date(today),
            durations,
            preferred_times: PreferredTimes::for_day(calendar::day_kind(today)),
            test_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{WEEKDAY_TIMES, WEEKEND_TIMES};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_default_to_two_hours_then_ninety_minutes() {
        let plan = DurationPlan::default();
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![120, 90]);
    }

    #[test]
    fn should_iterate_only_primary_without_fallback() {
        let plan = DurationPlan::new(60, None).unwrap();
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![60]);
    }

    #[test]
    fn should_reject_zero_duration() {
        assert_eq!(
            DurationPlan::new(0, Some(90)),
            Err(ValidationError::ZeroDuration)
        );
        assert_eq!(
            DurationPlan::new(120, Some(0)),
            Err(ValidationError::ZeroDuration)
        );
    }

    #[test]
    fn should_reject_fallback_equal_to_primary() {
        assert_eq!(
            DurationPlan::new(90, Some(90)),
            Err(ValidationError::DuplicateDuration(90))
        );
    }

    #[test]
    fn should_label_duration_like_the_form() {
        assert_eq!(DurationPlan::label(120), "120 Min");
    }

    #[test]
    fn should_deserialize_from_list() {
        let plan: DurationPlan = serde_json::from_str("[90, 60]").unwrap();
        assert_eq!(plan.primary(), 90);
        assert_eq!(plan.fallback(), Some(60));
    }

    #[test]
    fn should_reject_empty_and_oversized_lists() {
        assert!(serde_json::from_str::<DurationPlan>("[]").is_err());
        assert!(serde_json::from_str::<DurationPlan>("[120, 90, 60]").is_err());
    }

    #[test]
    fn should_serialize_as_list() {
        let json = serde_json::to_string(&DurationPlan::default()).unwrap();
        assert_eq!(json, "[120,90]");
    }

    #[test]
    fn should_build_weekday_request_one_week_ahead() {
        // Wednesday
        let request =
            ReservationRequest::for_today(date(2026, 10, 14), DurationPlan::default(), false);
        assert_eq!(request.target_date, date(2026, 10, 21));
        assert_eq!(
            request.preferred_times.iter().collect::<Vec<_>>(),
            WEEKDAY_TIMES
        );
        assert!(!request.test_mode);
    }

    #[test]
    fn should_select_window_from_today_not_target_date() {
        // Sunday: target is also a Sunday, but the rule is about today
        let request =
            ReservationRequest::for_today(date(2026, 10, 18), DurationPlan::default(), true);
        assert_eq!(
            request.preferred_times.iter().collect::<Vec<_>>(),
            WEEKEND_TIMES
        );
        assert_eq!(request.target_date, date(2026, 10, 25));
    }
}
