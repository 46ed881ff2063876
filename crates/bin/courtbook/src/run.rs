//! One reservation run: login, orchestrated attempts, wrap-up.

use std::error::Error;
use std::future::Future;

use courtbook_adapter_virtual::VirtualClubSite;
use courtbook_adapter_webdriver::WebDriverPage;
use courtbook_app::ports::{Clock, Page};
use courtbook_app::services::clock_gate::GateConfig;
use courtbook_app::services::orchestrator::AttemptOrchestrator;
use courtbook_app::services::reservation::AttemptTimeouts;
use courtbook_app::services::session::{self, Credentials};
use courtbook_domain::attempt::RunOutcome;
use courtbook_domain::error::CourtBookError;
use courtbook_domain::request::{DurationPlan, ReservationRequest};
use courtbook_domain::run_log::RunLog;

/// Everything a run needs besides the page and the mailer.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub base_url: String,
    pub credentials: Credentials,
    pub durations: DurationPlan,
    pub gate: GateConfig,
    pub timeouts: AttemptTimeouts,
    pub test_mode: bool,
}

/// A browser session the run drives as its page, closed once the run is over.
pub trait BrowserSession: Page + Sized {
    /// End the session.
    fn close(self) -> impl Future<Output = Result<(), CourtBookError>> + Send;
}

impl BrowserSession for WebDriverPage {
    async fn close(self) -> Result<(), CourtBookError> {
        Ok(WebDriverPage::close(self).await?)
    }
}

impl BrowserSession for VirtualClubSite {
    async fn close(self) -> Result<(), CourtBookError> {
        tracing::info!(bookings = self.bookings().len(), "virtual site closed");
        Ok(())
    }
}

/// A reservation run bound to today's request.
pub struct ReservationRun<C> {
    clock: C,
    orchestrator: AttemptOrchestrator<C>,
    request: ReservationRequest,
    base_url: String,
    credentials: Credentials,
    timeouts: AttemptTimeouts,
}

impl<C: Clock + Clone> ReservationRun<C> {
    /// Build today's request: target date a week out, preferred times from
    /// today's weekday.
    pub fn new(clock: C, settings: RunSettings) -> Self {
        let orchestrator =
            AttemptOrchestrator::new(clock.clone(), settings.gate, settings.timeouts);
        let request = ReservationRequest::for_today(
            orchestrator.gate().today(),
            settings.durations,
            settings.test_mode,
        );
        Self {
            clock,
            orchestrator,
            request,
            base_url: settings.base_url,
            credentials: settings.credentials,
            timeouts: settings.timeouts,
        }
    }

    #[must_use]
    pub fn request(&self) -> &ReservationRequest {
        &self.request
    }

    /// Empty run log reading in the club's timezone.
    #[must_use]
    pub fn new_log(&self) -> RunLog {
        RunLog::in_zone(self.orchestrator.gate().timezone())
    }

    /// Log in, run the attempts and log out if nothing was booked (a booking
    /// logs out on its own).
    ///
    /// A failed log out is only a warning: the outcome is already known.
    ///
    /// # Errors
    ///
    /// Any mandatory driver step failing aborts the run.
    #[tracing::instrument(skip_all, fields(run_id = %log.run_id(), target_date = %self.request.target_date))]
    pub async fn execute<P: Page>(
        &self,
        page: &P,
        log: &mut RunLog,
    ) -> Result<RunOutcome, CourtBookError> {
        session::login(page, &self.base_url, &self.credentials).await?;
        let outcome = self.orchestrator.run(page, &self.request, log).await?;
        if !outcome.is_success() {
            if let Err(err) = session::logout(page, self.timeouts.dismiss).await {
                tracing::warn!(error = %error_chain(&err), "failed to log out");
            }
        }
        Ok(outcome)
    }

    /// [`execute`](Self::execute) on `session`, then close it on every path.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute); a failed close is only logged.
    pub async fn execute_in<S: BrowserSession>(
        &self,
        session: S,
        log: &mut RunLog,
    ) -> Result<RunOutcome, CourtBookError> {
        let result = self.execute(&session, log).await;
        if let Err(err) = session.close().await {
            tracing::warn!(error = %error_chain(&err), "failed to close browser session");
        }
        result
    }

    /// Record how the run ended and tell whether a court was booked.
    pub fn conclude(
        &self,
        result: &Result<RunOutcome, CourtBookError>,
        log: &mut RunLog,
    ) -> bool {
        match result {
            Ok(outcome) => {
                let booked = outcome.booked();
                tracing::info!(
                    attempts = outcome.attempts().len(),
                    success = outcome.is_success(),
                    booked_minutes = booked.map(|a| a.duration_minutes),
                    "run finished"
                );
                booked.is_some()
            }
            Err(err) => {
                let message = format!("Run aborted: {}", error_chain(err));
                tracing::error!(error = ?err, "run aborted");
                log.record(self.clock.now(), message);
                false
            }
        }
    }
}

/// `err` followed by its sources, `": "`-separated.
#[must_use]
pub fn error_chain(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
