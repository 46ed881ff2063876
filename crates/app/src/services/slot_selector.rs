//! Slot selector — walk the preferred times on a search results page.

use std::time::Duration;

use courtbook_domain::error::CourtBookError;
use courtbook_domain::run_log::RunLog;
use courtbook_domain::slot::{PreferredTimes, SlotOutcome};

use crate::ports::{Clock, Page};
use crate::services::note;
use crate::site;

/// Default wait for a single time link to show up.
pub const DEFAULT_SLOT_TIMEOUT: Duration = Duration::from_millis(1500);

/// Tries preferred times in order until one is clicked.
pub struct SlotSelector<C> {
    clock: C,
    slot_timeout: Duration,
}

impl<C: Clock> SlotSelector<C> {
    /// Create a selector giving each time link `slot_timeout` to appear.
    pub fn new(clock: C, slot_timeout: Duration) -> Self {
        Self {
            clock,
            slot_timeout,
        }
    }

    /// Click the first preferred time the page offers.
    ///
    /// Stops early when the page shows the explicit "no availability" message.
    ///
    /// # Errors
    ///
    /// Returns [`CourtBookError::Driver`] only for driver failures other than
    /// a missing element.
    #[tracing::instrument(skip_all, fields(candidates = preferred.len()))]
    pub async fn select<P: Page>(
        &self,
        page: &P,
        preferred: &PreferredTimes,
        log: &mut RunLog,
    ) -> Result<SlotOutcome, CourtBookError> {
        for time in preferred.iter() {
            let lookup = page
                .click_within(&site::time_slot(time), self.slot_timeout)
                .await?;
            if lookup.is_found() {
                note(log, &self.clock, format!("Selected time slot {time}"));
                return Ok(SlotOutcome::Selected {
                    time: time.to_string(),
                });
            }

            if page.is_visible(&site::no_availability()).await? {
                note(
                    log,
                    &self.clock,
                    "No availability for this search, skipping remaining times",
                );
                return Ok(SlotOutcome::NoAvailability);
            }

            note(
                log,
                &self.clock,
                format!("Time slot {time} not available, trying next"),
            );
        }

        note(log, &self.clock, "None of the preferred times are available");
        Ok(SlotOutcome::NoMatchingPreferredTime)
    }
}
