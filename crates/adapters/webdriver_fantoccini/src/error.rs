//! WebDriver adapter error types.

use courtbook_domain::error::CourtBookError;

/// Errors specific to the WebDriver adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebDriverError {
    /// The WebDriver server refused or failed to open a session.
    #[error("failed to start WebDriver session")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command failed.
    #[error("WebDriver command failed")]
    Command(#[from] fantoccini::error::CmdError),

    /// A mandatory element did not appear within the action timeout.
    #[error("element not found: {0}")]
    ElementNotFound(String),
}

impl WebDriverError {
    /// Convert into a [`CourtBookError::Driver`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> CourtBookError {
        CourtBookError::Driver(Box::new(self))
    }
}

impl From<WebDriverError> for CourtBookError {
    fn from(err: WebDriverError) -> Self {
        err.into_domain()
    }
}
