//! Mailer port — outbound delivery of the run report.

use std::future::Future;

use courtbook_domain::error::CourtBookError;
use courtbook_domain::report::Report;

/// Delivers a composed [`Report`] to its configured recipient.
pub trait Mailer {
    /// Send the report.
    fn send(&self, report: Report) -> impl Future<Output = Result<(), CourtBookError>> + Send;
}

impl<T: Mailer + Send + Sync> Mailer for std::sync::Arc<T> {
    fn send(&self, report: Report) -> impl Future<Output = Result<(), CourtBookError>> + Send {
        (**self).send(report)
    }
}
