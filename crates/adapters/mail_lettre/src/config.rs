//! SMTP configuration.

use serde::Deserialize;

/// SMTP relay settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Relay hostname.
    pub smtp_host: String,
    /// Relay port.
    pub smtp_port: u16,
    /// Upgrade a plain connection with STARTTLS instead of connecting over
    /// implicit TLS.
    pub starttls: bool,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 465,
            starttls: false,
        }
    }
}

/// Who sends the report, who gets it, and how the sender authenticates.
#[derive(Clone)]
pub struct MailAccount {
    pub sender: String,
    pub receiver: String,
    pub password: String,
}

impl std::fmt::Debug for MailAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailAccount")
            .field("sender", &self.sender)
            .field("receiver", &self.receiver)
            .field("password", &"<redacted>")
            .finish()
    }
}
