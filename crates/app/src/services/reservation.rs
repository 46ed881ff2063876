//! Reservation attempt — one full pass through the booking form for a duration.

use std::time::Duration;

use chrono::NaiveDate;
use courtbook_domain::attempt::{AttemptOutcome, AttemptResult};
use courtbook_domain::calendar::format_form_date;
use courtbook_domain::error::CourtBookError;
use courtbook_domain::request::DurationPlan;
use courtbook_domain::run_log::RunLog;
use courtbook_domain::slot::{PreferredTimes, SlotOutcome};

use crate::ports::{Clock, Page};
use crate::services::slot_selector::{DEFAULT_SLOT_TIMEOUT, SlotSelector};
use crate::services::{note, session};
use crate::site;

pub const SUCCESS_MESSAGE: &str = "Reservation successful!";
pub const NOT_CONFIRMED_MESSAGE: &str = "Reservation failed: Confirm button not found. Either you have already booked or no slots available.";

/// Bounded waits for the optional affordances of an attempt.
#[derive(Debug, Clone, Copy)]
pub struct AttemptTimeouts {
    /// Per time link.
    pub slot: Duration,
    /// For the "Confirm" button after a slot is clicked.
    pub confirm: Duration,
    /// For acknowledgment dialogs and the log out link.
    pub dismiss: Duration,
}

impl Default for AttemptTimeouts {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT_TIMEOUT,
            confirm: Duration::from_secs(2),
            dismiss: Duration::from_secs(2),
        }
    }
}

/// Drives one search-select-confirm pass.
pub struct ReservationAttempt<C> {
    clock: C,
    selector: SlotSelector<C>,
    timeouts: AttemptTimeouts,
}

impl<C: Clock + Clone> ReservationAttempt<C> {
    /// Create a new attempt runner.
    pub fn new(clock: C, timeouts: AttemptTimeouts) -> Self {
        Self {
            selector: SlotSelector::new(clock.clone(), timeouts.slot),
            clock,
            timeouts,
        }
    }

    /// Search `target_date` for `duration_minutes` and book the first
    /// preferred time offered.
    ///
    /// # Errors
    ///
    /// Returns [`CourtBookError::Driver`] when a mandatory form step fails;
    /// the page is then in an unknown state and the run should stop.
    #[tracing::instrument(skip(self, page, preferred, log))]
    pub async fn attempt<P: Page>(
        &self,
        page: &P,
        target_date: NaiveDate,
        duration_minutes: u16,
        preferred: &PreferredTimes,
        log: &mut RunLog,
    ) -> Result<AttemptResult, CourtBookError> {
        let date = format_form_date(target_date);
        let duration = DurationPlan::label(duration_minutes);
        note(
            log,
            &self.clock,
            format!("Searching courts on {date} for {duration}"),
        );

        self.fill_search(page, &date, &duration).await?;

        let outcome = match self.selector.select(page, preferred, log).await? {
            SlotOutcome::Selected { time } => self.confirm(page, time, log).await?,
            other => other.into(),
        };

        Ok(AttemptResult {
            duration_minutes,
            outcome,
        })
    }

    async fn fill_search<P: Page>(
        &self,
        page: &P,
        date: &str,
        duration: &str,
    ) -> Result<(), CourtBookError> {
        page.click(&site::reserve_link()).await?;

        page.click(&site::default_category()).await?;
        page.click(&site::component_option()).await?;
        page.click(&site::default_surface()).await?;
        page.click(&site::surface_option()).await?;

        page.click(&site::time_from_toggle()).await?;
        page.click(&site::time_from_option()).await?;
        page.click(&site::time_to_toggle()).await?;
        page.click(&site::time_to_option()).await?;

        page.fill(&site::date_field(), date).await?;
        page.click(&site::duration_option(duration)).await?;

        page.click(&site::search_button()).await
    }

    async fn confirm<P: Page>(
        &self,
        page: &P,
        time: String,
        log: &mut RunLog,
    ) -> Result<AttemptOutcome, CourtBookError> {
        let confirm = site::confirm_button();
        if !page
            .wait_visible(&confirm, self.timeouts.confirm)
            .await?
            .is_found()
        {
            note(log, &self.clock, NOT_CONFIRMED_MESSAGE);
            self.dismiss(page).await?;
            return Ok(AttemptOutcome::NotConfirmed { time });
        }

        page.click(&confirm).await?;
        note(log, &self.clock, SUCCESS_MESSAGE);
        self.wrap_up(page, log).await;
        Ok(AttemptOutcome::Success { time })
    }

    /// Dismiss the acknowledgment and log out after a booking. The booking
    /// stands whatever happens here.
    async fn wrap_up<P: Page>(&self, page: &P, log: &mut RunLog) {
        if let Err(err) = self.dismiss(page).await {
            tracing::warn!(error = %err, "failed to dismiss acknowledgment after booking");
        }
        match session::logout(page, self.timeouts.dismiss).await {
            Ok(true) => note(log, &self.clock, "Logged out"),
            Ok(false) => {}
            Err(err) => tracing::warn!(error = %err, "failed to log out after booking"),
        }
    }

    async fn dismiss<P: Page>(&self, page: &P) -> Result<(), CourtBookError> {
        let lookup = page
            .click_within(&site::acknowledge_button(), self.timeouts.dismiss)
            .await?;
        tracing::debug!(?lookup, "acknowledgment dialog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{FixedClock, ScriptedPage};
    use courtbook_domain::calendar::DayKind;

    fn runner() -> ReservationAttempt<FixedClock> {
        ReservationAttempt::new(
            FixedClock::at(2026, 10, 17, 11, 0),
            AttemptTimeouts::default(),
        )
    }

    fn target() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 24).unwrap()
    }

    fn weekend() -> PreferredTimes {
        PreferredTimes::for_day(DayKind::Weekend)
    }

    #[tokio::test]
    async fn should_fill_form_in_order_then_confirm() {
        let page = ScriptedPage::default().with_slots("120 Min", &["9:00am"]);
        let mut log = RunLog::new();

        let result = runner()
            .attempt(&page, target(), 120, &weekend(), &mut log)
            .await
            .unwrap();

        assert_eq!(
            result,
            AttemptResult {
                duration_minutes: 120,
                outcome: AttemptOutcome::Success {
                    time: "9:00am".to_string()
                },
            }
        );
        assert_eq!(
            page.actions(),
            vec![
                "link \"Reserve a Court\"",
                "css \"a\" with text \"Racquetball\"",
                "text \"Tennis\" within \"#component_chosen\"",
                "css \"a\" with text \"All Surfaces\"",
                "text \"Pickleball\" within \"#surface_chosen\"",
                "css \"#timeFrom_chosen a\"",
                "text \"12:00 AM\" within \"#timeFrom_chosen\"",
                "css \"#timeTo_chosen a\"",
                "text \"11:00 PM\" within \"#timeTo_chosen\"",
                "fill css \"#date\" with \"10/24/2026\"",
                "text \"120 Min\"",
                "button \"Search\"",
                "link \"9:00am\"",
                "button \"Confirm\"",
                "button \"Ok\"",
                "link \"Log Out\"",
            ]
        );
        assert_eq!(page.confirmed(), 1);
        assert_eq!(
            log.messages().filter(|m| *m == SUCCESS_MESSAGE).count(),
            1
        );
    }

    #[tokio::test]
    async fn should_not_confirm_when_no_preferred_time_matches() {
        let page = ScriptedPage::default().with_slots("120 Min", &["1:00pm"]);

        let result = runner()
            .attempt(&page, target(), 120, &weekend(), &mut RunLog::new())
            .await
            .unwrap();

        assert_eq!(result.outcome, AttemptOutcome::NoMatchingPreferredTime);
        assert_eq!(page.confirmed(), 0);
        assert!(!page.actions().iter().any(|a| a == "button \"Confirm\""));
    }

    #[tokio::test]
    async fn should_report_no_slot_available_on_explicit_message() {
        let page = ScriptedPage::default().with_no_availability("90 Min");

        let result = runner()
            .attempt(&page, target(), 90, &weekend(), &mut RunLog::new())
            .await
            .unwrap();

        assert_eq!(result.outcome, AttemptOutcome::NoSlotAvailable);
        assert_eq!(result.duration_minutes, 90);
    }

    #[tokio::test]
    async fn should_fail_when_confirm_button_never_shows() {
        let page = ScriptedPage::default()
            .with_slots("120 Min", &["8:00am"])
            .without_confirm();
        let mut log = RunLog::new();

        let result = runner()
            .attempt(&page, target(), 120, &weekend(), &mut log)
            .await
            .unwrap();

        assert_eq!(
            result.outcome,
            AttemptOutcome::NotConfirmed {
                time: "8:00am".to_string()
            }
        );
        assert!(!result.is_success());
        assert!(log.messages().any(|m| m == NOT_CONFIRMED_MESSAGE));
        assert_eq!(page.actions().last().map(String::as_str), Some("button \"Ok\""));
    }

    #[tokio::test]
    async fn should_keep_booking_when_acknowledgment_click_fails() {
        let page = ScriptedPage::default()
            .with_slots("120 Min", &["9:00am"])
            .broken_at(site::acknowledge_button());
        let mut log = RunLog::new();

        let result = runner()
            .attempt(&page, target(), 120, &weekend(), &mut log)
            .await
            .unwrap();

        assert!(result.is_success());
        assert_eq!(page.confirmed(), 1);
        assert_eq!(
            log.messages().filter(|m| *m == SUCCESS_MESSAGE).count(),
            1
        );
        assert!(log.messages().any(|m| m == "Logged out"));
    }

    #[tokio::test]
    async fn should_keep_booking_when_log_out_click_fails() {
        let page = ScriptedPage::default()
            .with_slots("120 Min", &["9:00am"])
            .broken_at(site::log_out_link());
        let mut log = RunLog::new();

        let result = runner()
            .attempt(&page, target(), 120, &weekend(), &mut log)
            .await
            .unwrap();

        assert_eq!(
            result.outcome,
            AttemptOutcome::Success {
                time: "9:00am".to_string()
            }
        );
        assert_eq!(page.confirmed(), 1);
        assert!(!log.messages().any(|m| m == "Logged out"));
    }

    #[tokio::test]
    async fn should_abort_when_a_mandatory_step_fails() {
        let page = ScriptedPage::default().broken_at(site::surface_option());

        let result = runner()
            .attempt(&page, target(), 120, &weekend(), &mut RunLog::new())
            .await;

        assert!(matches!(result, Err(CourtBookError::Driver(_))));
        assert!(!page.actions().iter().any(|a| a == "button \"Search\""));
    }
}
