//! [`Page`] implementation over a fantoccini WebDriver client.

use std::future::Future;
use std::time::Duration;

use courtbook_app::ports::{ElementLookup, Key, Locator, Page};
use courtbook_domain::error::CourtBookError;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder};
use tokio::time::Instant;

use crate::config::WebDriverConfig;
use crate::error::WebDriverError;
use crate::locator::Query;

/// A browser page driven over WebDriver.
pub struct WebDriverPage {
    client: Client,
    action_timeout: Duration,
    poll_interval: Duration,
}

impl WebDriverPage {
    /// Open a new browser session on the configured WebDriver server.
    ///
    /// # Errors
    ///
    /// Returns [`WebDriverError::Session`] if the server is unreachable or
    /// refuses the requested capabilities.
    #[tracing::instrument(skip(config), fields(url = %config.url, browser = ?config.browser, headless = config.headless))]
    pub async fn connect(config: &WebDriverConfig) -> Result<Self, WebDriverError> {
        let mut builder = ClientBuilder::native();
        builder.capabilities(config.capabilities());
        let client = builder.connect(&config.url).await?;
        tracing::info!("browser session started");
        Ok(Self {
            client,
            action_timeout: config.action_timeout(),
            poll_interval: config.poll_interval(),
        })
    }

    /// End the browser session.
    ///
    /// # Errors
    ///
    /// Returns [`WebDriverError::Command`] if the server fails to close the
    /// session.
    pub async fn close(self) -> Result<(), WebDriverError> {
        self.client.close().await?;
        tracing::info!("browser session closed");
        Ok(())
    }

    /// Every element matching `query`, in document order. No waiting.
    async fn find_all(&self, query: &Query) -> Result<Vec<Element>, CmdError> {
        use fantoccini::Locator as Wd;

        match query {
            Query::Css(css) => self.client.find_all(Wd::Css(css)).await,
            Query::XPath(xpath) => self.client.find_all(Wd::XPath(xpath)).await,
            Query::CssWithText { css, text } => {
                let mut matching = Vec::new();
                for element in self.client.find_all(Wd::Css(css)).await? {
                    if element.text().await?.contains(text.as_str()) {
                        matching.push(element);
                    }
                }
                Ok(matching)
            }
            Query::Scoped { scope, xpath } => {
                let mut matching = Vec::new();
                for container in self.client.find_all(Wd::Css(scope)).await? {
                    matching.extend(container.find_all(Wd::XPath(xpath)).await?);
                }
                Ok(matching)
            }
        }
    }

    /// First displayed match. Hidden matches (e.g. the `<option>`s behind a
    /// chosen.js dropdown) are skipped.
    async fn find_displayed(&self, query: &Query) -> Result<Option<Element>, CmdError> {
        first_displayed(self.find_all(query).await?).await
    }

    /// Poll until a match is displayed, or `timeout` passes.
    async fn wait_for(&self, query: &Query, timeout: Duration) -> Result<Option<Element>, CmdError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(element) = self.find_displayed(query).await? {
                return Ok(Some(element));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn require(&self, locator: &Locator) -> Result<Element, WebDriverError> {
        self.wait_for(&Query::from(locator), self.action_timeout)
            .await?
            .ok_or_else(|| WebDriverError::ElementNotFound(locator.to_string()))
    }

    async fn probe(&self, locator: &Locator, timeout: Duration) -> Result<Option<Element>, WebDriverError> {
        Ok(self.wait_for(&Query::from(locator), timeout).await?)
    }
}

/// An element whose visibility can be asked for.
trait Displayable {
    fn displayed(&self) -> impl Future<Output = Result<bool, CmdError>> + Send;
}

impl Displayable for Element {
    fn displayed(&self) -> impl Future<Output = Result<bool, CmdError>> + Send {
        self.is_displayed()
    }
}

async fn first_displayed<T: Displayable + Send>(candidates: Vec<T>) -> Result<Option<T>, CmdError> {
    for candidate in candidates {
        if candidate.displayed().await? {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

fn absent(timeout: Duration) -> ElementLookup {
    if timeout.is_zero() {
        ElementLookup::NotFound
    } else {
        ElementLookup::TimedOut
    }
}

fn key_text(key: Key) -> String {
    let key = match key {
        Key::Tab => fantoccini::key::Key::Tab,
    };
    char::from(key).to_string()
}

impl Page for WebDriverPage {
    async fn goto(&self, url: &str) -> Result<(), CourtBookError> {
        tracing::debug!(%url, "navigate");
        self.client
            .goto(url)
            .await
            .map_err(WebDriverError::from)?;
        Ok(())
    }

    async fn click(&self, locator: &Locator) -> Result<(), CourtBookError> {
        tracing::debug!(%locator, "click");
        let element = self.require(locator).await?;
        element.click().await.map_err(WebDriverError::from)?;
        Ok(())
    }

    async fn fill(&self, locator: &Locator, text: &str) -> Result<(), CourtBookError> {
        tracing::debug!(%locator, "fill");
        let element = self.require(locator).await?;
        element.clear().await.map_err(WebDriverError::from)?;
        element.send_keys(text).await.map_err(WebDriverError::from)?;
        Ok(())
    }

    async fn press(&self, locator: &Locator, key: Key) -> Result<(), CourtBookError> {
        tracing::debug!(%locator, ?key, "press");
        let element = self.require(locator).await?;
        element
            .send_keys(&key_text(key))
            .await
            .map_err(WebDriverError::from)?;
        Ok(())
    }

    async fn click_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<ElementLookup, CourtBookError> {
        match self.probe(locator, timeout).await? {
            Some(element) => {
                element.click().await.map_err(WebDriverError::from)?;
                tracing::debug!(%locator, "clicked optional element");
                Ok(ElementLookup::Found)
            }
            None => {
                tracing::debug!(%locator, ?timeout, "optional element absent");
                Ok(absent(timeout))
            }
        }
    }

    async fn wait_visible(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<ElementLookup, CourtBookError> {
        Ok(match self.probe(locator, timeout).await? {
            Some(_) => ElementLookup::Found,
            None => absent(timeout),
        })
    }

    async fn is_visible(&self, locator: &Locator) -> Result<bool, CourtBookError> {
        let element = self
            .find_displayed(&Query::from(locator))
            .await
            .map_err(WebDriverError::from)?;
        Ok(element.is_some())
    }
}
