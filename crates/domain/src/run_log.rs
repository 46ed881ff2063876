//! Run log — the append-only trail of status lines for one run.
//!
//! Owned by the caller for the whole run and passed `&mut` into each
//! component. Handed to the reporter once, at the end.

use chrono_tz::Tz;

use crate::id::RunId;
use crate::time::{self, Timestamp};

/// A single timestamped status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: Timestamp,
    pub message: String,
}

impl LogEntry {
    /// `[HH:MM:SS] message`, the time read in `zone`.
    #[must_use]
    pub fn render(&self, zone: Tz) -> String {
        format!("[{}] {}", time::wall_clock(self.at, zone), self.message)
    }
}

/// Append-only, ordered list of [`LogEntry`].
///
/// Entries are stored in UTC and rendered in the log's zone.
#[derive(Debug, Clone)]
pub struct RunLog {
    run_id: RunId,
    zone: Tz,
    entries: Vec<LogEntry>,
}

impl Default for RunLog {
    fn default() -> Self {
        Self::in_zone(Tz::UTC)
    }
}

impl RunLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty log whose lines read in `zone`.
    #[must_use]
    pub fn in_zone(zone: Tz) -> Self {
        Self {
            run_id: RunId::default(),
            zone,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn zone(&self) -> Tz {
        self.zone
    }

    #[must_use]
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Append a line.
    pub fn record(&mut self, at: Timestamp, message: impl Into<String>) {
        self.entries.push(LogEntry {
            at,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages only, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    /// Rendered lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| e.render(self.zone))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
