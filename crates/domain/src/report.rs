//! Report — the summary email composed from a finished run.

use chrono::NaiveDate;

use crate::calendar::format_form_date;
use crate::run_log::RunLog;

/// Plain-text message ready to hand to a mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub subject: String,
    pub body: String,
}

fn status(success: bool) -> &'static str {
    if success { "Success" } else { "Unsuccessful" }
}

impl Report {
    /// Compose the summary: every log line in order, then the final status.
    #[must_use]
    pub fn compose(log: &RunLog, target_date: NaiveDate, success: bool) -> Self {
        let subject = format!(
            "Court reservation for {}: {}",
            format_form_date(target_date),
            status(success)
        );

        let mut body = String::new();
        for line in log.lines() {
            body.push_str(&line);
            body.push('\n');
        }
        if !log.is_empty() {
            body.push('\n');
        }
        body.push_str("Final result: ");
        body.push_str(status(success));
        body.push('\n');

        Self { subject, body }
    }
}
