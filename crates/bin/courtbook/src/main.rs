//! # courtbook — court reservation bot
//!
//! Composition root that wires the adapters together and runs one
//! reservation.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars) and initialise logging
//! - Open the browser session (WebDriver or the virtual site)
//! - Log in, wait for release, attempt the primary then the fallback duration
//! - Close the browser session whatever happened
//! - Email the run log, then exit non-zero if the run aborted
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::process::ExitCode;

use courtbook::config::{Config, Driver};
use courtbook::run::{ReservationRun, RunSettings};
use courtbook_adapter_mail_lettre::LettreMailer;
use courtbook_adapter_virtual::VirtualClubSite;
use courtbook_adapter_webdriver::WebDriverPage;
use courtbook_app::ports::SystemClock;
use courtbook_app::services::reporter::Reporter;
use courtbook_app::services::reservation::AttemptTimeouts;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let filter = EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {:?}: {err}", config.logging.filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mailer = LettreMailer::new(&config.mail, &config.mail_account()?)?;
    let run = ReservationRun::new(
        SystemClock,
        RunSettings {
            base_url: config.site.base_url.clone(),
            credentials: config.credentials()?,
            durations: config.reservation.durations,
            gate: config.gate()?,
            timeouts: AttemptTimeouts::default(),
            test_mode: config.test_mode(),
        },
    );
    tracing::info!(
        target_date = %run.request().target_date,
        durations = ?run.request().durations,
        test_mode = config.test_mode(),
        driver = ?config.browser.driver,
        "starting reservation run"
    );

    let mut log = run.new_log();
    let result = match config.browser.driver {
        Driver::WebDriver => match WebDriverPage::connect(&config.webdriver()).await {
            Ok(page) => run.execute_in(page, &mut log).await,
            Err(err) => Err(err.into()),
        },
        Driver::Virtual => {
            let site = VirtualClubSite::new(config.virtual_site.clone());
            run.execute_in(site, &mut log).await
        }
    };

    let success = run.conclude(&result, &mut log);
    Reporter::new(mailer)
        .send(&log, run.request().target_date, success)
        .await;

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
