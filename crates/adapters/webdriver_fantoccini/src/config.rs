//! WebDriver session configuration.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Browser the WebDriver server should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Chrome,
    Firefox,
}

/// Configuration for the WebDriver adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebDriverConfig {
    /// URL of the WebDriver server.
    pub url: String,
    /// Which browser to request.
    pub browser: Browser,
    /// Run without a visible window.
    pub headless: bool,
    /// How long mandatory elements may take to appear, in seconds.
    pub action_timeout_secs: u64,
    /// Delay between two element lookups while waiting, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:4444".to_string(),
            browser: Browser::Chrome,
            headless: true,
            action_timeout_secs: 30,
            poll_interval_ms: 100,
        }
    }
}

impl WebDriverConfig {
    #[must_use]
    pub fn action_timeout(&self) -> Duration {
        Duration::from_secs(self.action_timeout_secs)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// W3C capabilities requested when opening the session.
    #[must_use]
    pub fn capabilities(&self) -> Map<String, Value> {
        let caps = match self.browser {
            Browser::Chrome => {
                let mut args = vec!["--window-size=1280,1024"];
                if self.headless {
                    args.push("--headless=new");
                }
                json!({
                    "browserName": "chrome",
                    "goog:chromeOptions": { "args": args },
                })
            }
            Browser::Firefox => {
                let args: Vec<&str> = if self.headless {
                    vec!["-headless"]
                } else {
                    Vec::new()
                };
                json!({
                    "browserName": "firefox",
                    "moz:firefoxOptions": { "args": args },
                })
            }
        };
        match caps {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}
