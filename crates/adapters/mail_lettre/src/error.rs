//! Mail adapter error types.

use courtbook_domain::error::CourtBookError;

/// Errors specific to the SMTP mail adapter.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A sender or receiver address could not be parsed.
    #[error("invalid email address")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("failed to build email")]
    Message(#[from] lettre::error::Error),

    /// The relay refused the connection, the credentials or the message.
    #[error("SMTP delivery failed")]
    Transport(#[from] lettre::transport::smtp::Error),
}

impl MailError {
    /// Convert into a [`CourtBookError::Mail`].
    #[must_use]
    pub fn into_domain(self) -> CourtBookError {
        CourtBookError::Mail(Box::new(self))
    }
}

impl From<MailError> for CourtBookError {
    fn from(err: MailError) -> Self {
        err.into_domain()
    }
}
