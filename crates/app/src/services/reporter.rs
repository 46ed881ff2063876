//! Reporter — email the run log once the outcome is known.

use chrono::NaiveDate;
use courtbook_domain::report::Report;
use courtbook_domain::run_log::RunLog;

use crate::ports::Mailer;

/// Sends the end-of-run summary.
pub struct Reporter<M> {
    mailer: M,
}

impl<M: Mailer> Reporter<M> {
    /// Create a new reporter backed by the given mailer.
    pub fn new(mailer: M) -> Self {
        Self { mailer }
    }

    /// Compose and deliver the summary.
    ///
    /// Delivery failures are logged and swallowed: the reservation outcome
    /// stands whether or not the email goes out. Returns whether it was sent.
    #[tracing::instrument(skip(self, log), fields(run_id = %log.run_id(), lines = log.len()))]
    pub async fn send(&self, log: &RunLog, target_date: NaiveDate, success: bool) -> bool {
        let report = Report::compose(log, target_date, success);
        let subject = report.subject.clone();
        match self.mailer.send(report).await {
            Ok(()) => {
                tracing::info!(%subject, "report sent");
                true
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to send report");
                false
            }
        }
    }
}
