//! Attempt outcomes — one per duration tried — and the run they add up to.

use serde::{Deserialize, Serialize};

use crate::slot::SlotOutcome;

/// How a single reservation attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// A slot was selected and the booking confirmed.
    Success { time: String },
    /// The search returned an explicit "no availability" page.
    NoSlotAvailable,
    /// None of the preferred times were offered.
    NoMatchingPreferredTime,
    /// A slot was clicked but no confirmation was offered
    /// (already booked, or the slot vanished).
    NotConfirmed { time: String },
}

impl AttemptOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<SlotOutcome> for AttemptOutcome {
    /// Map a failed slot selection onto an attempt outcome.
    ///
    /// A selected slot still needs confirming, so it maps to
    /// [`NotConfirmed`](Self::NotConfirmed) until the confirm step says otherwise.
    fn from(outcome: SlotOutcome) -> Self {
        match outcome {
            SlotOutcome::Selected { time } => Self::NotConfirmed { time },
            SlotOutcome::NoAvailability => Self::NoSlotAvailable,
            SlotOutcome::NoMatchingPreferredTime => Self::NoMatchingPreferredTime,
        }
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { time } => write!(f, "booked {time}"),
            Self::NoSlotAvailable => f.write_str("no slot available"),
            Self::NoMatchingPreferredTime => f.write_str("no matching preferred time"),
            Self::NotConfirmed { time } => write!(f, "{time} could not be confirmed"),
        }
    }
}

/// Outcome of one attempt for a given duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptResult {
    pub duration_minutes: u16,
    pub outcome: AttemptOutcome,
}

impl AttemptResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// Every attempt made during a run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    attempts: Vec<AttemptResult>,
}

impl RunOutcome {
    /// Record an attempt. Attempts after a success are a logic error upstream
    /// and are ignored.
    pub fn push(&mut self, attempt: AttemptResult) {
        if !self.is_success() {
            self.attempts.push(attempt);
        }
    }

    #[must_use]
    pub fn attempts(&self) -> &[AttemptResult] {
        &self.attempts
    }

    /// Whether the run ended with a confirmed reservation.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.attempts.last().is_some_and(AttemptResult::is_success)
    }

    /// The confirmed attempt, if any.
    #[must_use]
    pub fn booked(&self) -> Option<&AttemptResult> {
        self.attempts.iter().find(|a| a.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(minutes: u16) -> AttemptResult {
        AttemptResult {
            duration_minutes: minutes,
            outcome: AttemptOutcome::Success {
                time: "6:00pm".to_string(),
            },
        }
    }

    fn failure(minutes: u16) -> AttemptResult {
        AttemptResult {
            duration_minutes: minutes,
            outcome: AttemptOutcome::NoMatchingPreferredTime,
        }
    }

    #[test]
    fn should_not_be_successful_when_empty() {
        assert!(!RunOutcome::default().is_success());
    }

    #[test]
    fn should_be_successful_when_fallback_succeeds() {
        let mut run = RunOutcome::default();
        run.push(failure(120));
        run.push(success(90));
        assert!(run.is_success());
        assert_eq!(run.booked().map(|a| a.duration_minutes), Some(90));
        assert_eq!(run.attempts().len(), 2);
    }

    #[test]
    fn should_ignore_attempts_after_success() {
        let mut run = RunOutcome::default();
        run.push(success(120));
        run.push(failure(90));
        assert_eq!(run.attempts().len(), 1);
        assert!(run.is_success());
    }

    #[test]
    fn should_map_slot_outcomes_onto_attempt_outcomes() {
        assert_eq!(
            AttemptOutcome::from(SlotOutcome::NoAvailability),
            AttemptOutcome::NoSlotAvailable
        );
        assert_eq!(
            AttemptOutcome::from(SlotOutcome::NoMatchingPreferredTime),
            AttemptOutcome::NoMatchingPreferredTime
        );
        assert!(!AttemptOutcome::from(SlotOutcome::Selected {
            time: "7:00pm".to_string()
        })
        .is_success());
    }

    #[test]
    fn should_serialize_with_snake_case_tag() {
        let json = serde_json::to_value(AttemptOutcome::NoSlotAvailable).unwrap();
        assert_eq!(json, serde_json::json!({"type": "no_slot_available"}));
    }
}
