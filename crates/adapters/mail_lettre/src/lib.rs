//! # courtbook-adapter-mail-lettre
//!
//! SMTP implementation of the [`Mailer`] port built on
//! [lettre](https://docs.rs/lettre).
//!
//! Reports go out as plain text from the configured sender to the configured
//! receiver, authenticated with the sender's (app) password.
//!
//! ## Dependency rule
//!
//! Depends on `courtbook-app` (port traits) and `courtbook-domain` only.

pub mod config;
pub mod error;

use courtbook_app::ports::Mailer;
use courtbook_domain::error::CourtBookError;
use courtbook_domain::report::Report;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

pub use config::{MailAccount, MailConfig};
pub use error::MailError;

/// Parsed sender and receiver.
#[derive(Debug, Clone)]
struct Envelope {
    from: Mailbox,
    to: Mailbox,
}

impl Envelope {
    fn parse(account: &MailAccount) -> Result<Self, MailError> {
        Ok(Self {
            from: account.sender.parse()?,
            to: account.receiver.parse()?,
        })
    }

    fn compose(&self, report: Report) -> Result<Message, MailError> {
        Ok(Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(report.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(report.body)?)
    }
}

/// Sends reports over an authenticated SMTP relay.
pub struct LettreMailer {
    envelope: Envelope,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl LettreMailer {
    /// Prepare the relay and validate both addresses. No connection is made
    /// until the first report is sent.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Address`] for a malformed address and
    /// [`MailError::Transport`] if TLS cannot be set up for the host.
    pub fn new(config: &MailConfig, account: &MailAccount) -> Result<Self, MailError> {
        let envelope = Envelope::parse(account)?;
        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        };
        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                account.sender.clone(),
                account.password.clone(),
            ))
            .build();
        Ok(Self {
            envelope,
            transport,
        })
    }
}

impl Mailer for LettreMailer {
    async fn send(&self, report: Report) -> Result<(), CourtBookError> {
        let message = self.envelope.compose(report)?;
        self.transport
            .send(message)
            .await
            .map_err(MailError::from)?;
        tracing::debug!(to = %self.envelope.to, "email accepted by relay");
        Ok(())
    }
}
