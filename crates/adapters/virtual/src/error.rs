//! Virtual site error types.

use courtbook_domain::error::CourtBookError;

/// Errors raised by the virtual site when the flow does something the real
/// page would not allow.
#[derive(Debug, thiserror::Error)]
pub enum VirtualSiteError {
    /// The element does not exist on the current screen.
    #[error("element not found on {screen} screen: {locator}")]
    ElementNotFound {
        screen: &'static str,
        locator: String,
    },

    /// The element exists but cannot be used yet.
    #[error("{locator} is not usable: {reason}")]
    NotUsable {
        locator: String,
        reason: &'static str,
    },
}

impl VirtualSiteError {
    /// Convert into a [`CourtBookError::Driver`].
    #[must_use]
    pub fn into_domain(self) -> CourtBookError {
        CourtBookError::Driver(Box::new(self))
    }
}

impl From<VirtualSiteError> for CourtBookError {
    fn from(err: VirtualSiteError) -> Self {
        err.into_domain()
    }
}
