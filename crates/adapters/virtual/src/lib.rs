//! # courtbook-adapter-virtual
//!
//! In-memory stand-in for the club booking site, used for dry runs and
//! end-to-end tests without a browser.
//!
//! The site understands the same locators the reservation flow uses and moves
//! between a login screen, a home screen and the reservation form. Searches
//! return whatever [`VirtualSiteConfig`] offers for the chosen duration, and
//! confirming a slot records a [`Booking`] and removes the slot.
//!
//! ## Dependency rule
//!
//! Depends on `courtbook-app` (port traits) and `courtbook-domain` only.

mod config;
mod error;
mod state;

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use courtbook_app::ports::{ElementLookup, Key, Locator, Page};
use courtbook_domain::error::CourtBookError;

pub use config::{SlotOffer, VirtualSiteConfig};
pub use error::VirtualSiteError;
pub use state::Booking;

use state::SiteState;

/// Simulated club site implementing [`Page`].
pub struct VirtualClubSite {
    state: Mutex<SiteState>,
}

impl Default for VirtualClubSite {
    fn default() -> Self {
        Self::new(VirtualSiteConfig::default())
    }
}

impl VirtualClubSite {
    /// Create a site offering the given availability.
    #[must_use]
    pub fn new(config: VirtualSiteConfig) -> Self {
        Self {
            state: Mutex::new(SiteState::new(config)),
        }
    }

    /// Reservations confirmed so far.
    #[must_use]
    pub fn bookings(&self) -> Vec<Booking> {
        self.lock().bookings().to_vec()
    }

    /// Whether a user is currently signed in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.lock().is_logged_in()
    }

    fn lock(&self) -> MutexGuard<'_, SiteState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn absent(timeout: Duration) -> ElementLookup {
    if timeout.is_zero() {
        ElementLookup::NotFound
    } else {
        ElementLookup::TimedOut
    }
}

impl Page for VirtualClubSite {
    async fn goto(&self, url: &str) -> Result<(), CourtBookError> {
        tracing::debug!(%url, "virtual navigate");
        self.lock().goto();
        Ok(())
    }

    async fn click(&self, locator: &Locator) -> Result<(), CourtBookError> {
        Ok(self.lock().click(locator)?)
    }

    async fn fill(&self, locator: &Locator, text: &str) -> Result<(), CourtBookError> {
        Ok(self.lock().fill(locator, text)?)
    }

    async fn press(&self, locator: &Locator, _key: Key) -> Result<(), CourtBookError> {
        Ok(self.lock().press(locator)?)
    }

    async fn click_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<ElementLookup, CourtBookError> {
        let mut state = self.lock();
        if !state.is_present(locator) {
            return Ok(absent(timeout));
        }
        state.click(locator)?;
        Ok(ElementLookup::Found)
    }

    async fn wait_visible(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<ElementLookup, CourtBookError> {
        Ok(if self.lock().is_present(locator) {
            ElementLookup::Found
        } else {
            absent(timeout)
        })
    }

    async fn is_visible(&self, locator: &Locator) -> Result<bool, CourtBookError> {
        Ok(self.lock().is_present(locator))
    }
}
