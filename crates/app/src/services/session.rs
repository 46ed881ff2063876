//! Session — logging in before the run and out after a booking.

use std::time::Duration;

use courtbook_domain::error::CourtBookError;

use crate::ports::{Key, Page};
use crate::site;

/// Club account credentials.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Open the club site and sign in.
///
/// # Errors
///
/// Any driver failure: there is nothing to do without a session.
#[tracing::instrument(skip(page, credentials), fields(username = %credentials.username))]
pub async fn login<P: Page>(
    page: &P,
    base_url: &str,
    credentials: &Credentials,
) -> Result<(), CourtBookError> {
    page.goto(base_url).await?;
    page.click(&site::username_field()).await?;
    page.fill(&site::username_field(), &credentials.username).await?;
    page.press(&site::username_field(), Key::Tab).await?;
    page.fill(&site::password_field(), &credentials.password).await?;
    page.click(&site::login_submit()).await?;
    tracing::debug!("login form submitted");
    Ok(())
}

/// Click "Log Out" if it shows up within `timeout`.
///
/// Returns whether the link was clicked.
///
/// # Errors
///
/// Driver failures other than a missing link.
#[tracing::instrument(skip(page))]
pub async fn logout<P: Page>(page: &P, timeout: Duration) -> Result<bool, CourtBookError> {
    let clicked = page
        .click_within(&site::log_out_link(), timeout)
        .await?
        .is_found();
    if !clicked {
        tracing::warn!("log out link not found");
    }
    Ok(clicked)
}
