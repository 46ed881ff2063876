//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `courtbook.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values; credentials come from the environment only.

use std::time::Duration;

use chrono_tz::Tz;
use courtbook_adapter_mail_lettre::{MailAccount, MailConfig};
use courtbook_adapter_virtual::VirtualSiteConfig;
use courtbook_adapter_webdriver::{Browser, WebDriverConfig};
use courtbook_app::services::clock_gate::GateConfig;
use courtbook_app::services::session::Credentials;
use courtbook_app::site;
use courtbook_domain::request::DurationPlan;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "courtbook.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Club site and release schedule.
    pub site: SiteConfig,
    /// What to book.
    pub reservation: ReservationConfig,
    /// Browser driver settings.
    pub browser: BrowserConfig,
    /// SMTP relay settings.
    pub mail: MailConfig,
    /// Availability offered by the virtual site.
    #[serde(rename = "virtual")]
    pub virtual_site: VirtualSiteConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Credentials, from the environment only.
    #[serde(skip)]
    pub secrets: Secrets,
}

/// Club site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Login page URL.
    pub base_url: String,
    /// IANA name of the club's timezone.
    pub timezone: String,
    /// Local hour at which courts are released.
    pub release_hour: u32,
    /// Seconds between two clock readings while waiting for release.
    pub poll_interval_secs: u64,
}

/// Reservation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReservationConfig {
    /// Primary then optional fallback duration, in minutes.
    pub durations: DurationPlan,
    /// Skip the release wait and run headed by default.
    pub test_mode: bool,
}

/// Which [`Page`](courtbook_app::ports::Page) implementation drives the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// A real browser behind a WebDriver server.
    #[default]
    WebDriver,
    /// The in-memory club site.
    Virtual,
}

/// Browser configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub driver: Driver,
    /// URL of the WebDriver server.
    pub webdriver_url: String,
    pub browser: Browser,
    /// Defaults to the opposite of test mode when unset.
    pub headless: Option<bool>,
    /// Seconds mandatory elements may take to appear.
    pub action_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Secrets read from `PB_*` environment variables.
#[derive(Default, Clone)]
pub struct Secrets {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email_sender: Option<String>,
    pub email_receiver: Option<String>,
    pub email_password: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Secrets")
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("email_sender", &self.email_sender)
            .field("email_receiver", &self.email_receiver)
            .field("email_password", &redacted(&self.email_password))
            .finish()
    }
}

impl Config {
    /// Load configuration from `courtbook.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, a required
    /// variable is missing or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        self.secrets.username = var("PB_USERNAME").or(self.secrets.username.take());
        self.secrets.password = var("PB_PASSWORD").or(self.secrets.password.take());
        self.secrets.email_sender = var("PB_EMAIL_SENDER").or(self.secrets.email_sender.take());
        self.secrets.email_receiver =
            var("PB_EMAIL_RECEIVER").or(self.secrets.email_receiver.take());
        self.secrets.email_password =
            var("PB_EMAIL_PASSWORD").or(self.secrets.email_password.take());

        if let Some(val) = var("PB_TEST_MODE") {
            self.reservation.test_mode = parse_flag(&val);
        }
        if let Some(val) = var("PB_WEBDRIVER_URL") {
            self.browser.webdriver_url = val;
        }
        if let Some(val) = var("PB_TIMEZONE") {
            self.site.timezone = val;
        }
        if let Some(val) = var("PB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.site.release_hour > 23 {
            return Err(ConfigError::Validation(format!(
                "release hour must be between 0 and 23, got {}",
                self.site.release_hour
            )));
        }
        if self.site.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.browser.action_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "action timeout must be non-zero".to_string(),
            ));
        }
        self.timezone()?;
        self.credentials()?;
        self.mail_account()?;
        Ok(())
    }

    /// The club's timezone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an unknown IANA name.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.site
            .timezone
            .parse()
            .map_err(|_| ConfigError::Validation(format!("unknown timezone {:?}", self.site.timezone)))
    }

    /// Release schedule for the clock gate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an unknown timezone.
    pub fn gate(&self) -> Result<GateConfig, ConfigError> {
        Ok(GateConfig {
            release_hour: self.site.release_hour,
            timezone: self.timezone()?,
            poll_interval: Duration::from_secs(self.site.poll_interval_secs),
        })
    }

    /// Club login.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when a variable is unset.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        Ok(Credentials {
            username: required(self.secrets.username.as_ref(), "PB_USERNAME")?,
            password: required(self.secrets.password.as_ref(), "PB_PASSWORD")?,
        })
    }

    /// Report sender, receiver and sender password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when a variable is unset.
    pub fn mail_account(&self) -> Result<MailAccount, ConfigError> {
        Ok(MailAccount {
            sender: required(self.secrets.email_sender.as_ref(), "PB_EMAIL_SENDER")?,
            receiver: required(self.secrets.email_receiver.as_ref(), "PB_EMAIL_RECEIVER")?,
            password: required(self.secrets.email_password.as_ref(), "PB_EMAIL_PASSWORD")?,
        })
    }

    #[must_use]
    pub fn test_mode(&self) -> bool {
        self.reservation.test_mode
    }

    /// Run headless unless configured otherwise; test runs show the browser.
    #[must_use]
    pub fn headless(&self) -> bool {
        self.browser.headless.unwrap_or(!self.test_mode())
    }

    /// Settings for the WebDriver adapter.
    #[must_use]
    pub fn webdriver(&self) -> WebDriverConfig {
        WebDriverConfig {
            url: self.browser.webdriver_url.clone(),
            browser: self.browser.browser,
            headless: self.headless(),
            action_timeout_secs: self.browser.action_timeout_secs,
            ..WebDriverConfig::default()
        }
    }
}

fn required(value: Option<&String>, name: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or(ConfigError::MissingVar(name))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: site::BASE_URL.to_string(),
            timezone: "America/Toronto".to_string(),
            release_hour: 7,
            poll_interval_secs: 1,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        let webdriver = WebDriverConfig::default();
        Self {
            driver: Driver::WebDriver,
            webdriver_url: webdriver.url,
            browser: webdriver.browser,
            headless: None,
            action_timeout_secs: webdriver.action_timeout_secs,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn,courtbook=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
