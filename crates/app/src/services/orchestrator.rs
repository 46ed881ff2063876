//! Attempt orchestrator — wait for release, then primary duration, then one fallback.

use courtbook_domain::attempt::RunOutcome;
use courtbook_domain::error::CourtBookError;
use courtbook_domain::request::ReservationRequest;
use courtbook_domain::run_log::RunLog;

use crate::ports::{Clock, Page};
use crate::services::clock_gate::{ClockGate, GateConfig};
use crate::services::note;
use crate::services::reservation::{AttemptTimeouts, ReservationAttempt};

/// Runs at most two reservation attempts on one authenticated page.
pub struct AttemptOrchestrator<C> {
    clock: C,
    gate: ClockGate<C>,
    attempt: ReservationAttempt<C>,
}

impl<C: Clock + Clone> AttemptOrchestrator<C> {
    /// Create a new orchestrator.
    pub fn new(clock: C, gate: GateConfig, timeouts: AttemptTimeouts) -> Self {
        Self {
            gate: ClockGate::new(clock.clone(), gate),
            attempt: ReservationAttempt::new(clock.clone(), timeouts),
            clock,
        }
    }

    /// The gate, e.g. to compute the club's "today" before building a request.
    #[must_use]
    pub fn gate(&self) -> &ClockGate<C> {
        &self.gate
    }

    /// Wait for release, then try the primary duration and, if it does not
    /// book, the fallback duration once.
    ///
    /// The same page is reused for both attempts; no second login happens.
    ///
    /// # Errors
    ///
    /// Returns [`CourtBookError::Driver`] when a mandatory step of either
    /// attempt fails. Attempts made so far are lost with the error, the run
    /// log keeps their trail.
    #[tracing::instrument(skip_all, fields(run_id = %log.run_id(), target_date = %request.target_date))]
    pub async fn run<P: Page>(
        &self,
        page: &P,
        request: &ReservationRequest,
        log: &mut RunLog,
    ) -> Result<RunOutcome, CourtBookError> {
        self.gate.wait_until_release(request.test_mode, log).await;

        let mut outcome = RunOutcome::default();
        let mut previous: Option<u16> = None;
        for minutes in request.durations.iter() {
            if let Some(failed) = previous {
                note(
                    log,
                    &self.clock,
                    format!("No reservation with {failed} minutes, falling back to {minutes} minutes"),
                );
            }

            let result = self
                .attempt
                .attempt(
                    page,
                    request.target_date,
                    minutes,
                    &request.preferred_times,
                    log,
                )
                .await?;
            note(
                log,
                &self.clock,
                format!("Attempt with {minutes} minutes: {}", result.outcome),
            );
            let booked = result.is_success();
            outcome.push(result);
            if booked {
                break;
            }
            previous = Some(minutes);
        }

        Ok(outcome)
    }
}
