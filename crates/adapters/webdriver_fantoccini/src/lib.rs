//! # courtbook-adapter-webdriver
//!
//! Browser adapter — implements the [`Page`](courtbook_app::ports::Page) port
//! on top of a W3C WebDriver session using
//! [fantoccini](https://docs.rs/fantoccini).
//!
//! ## Responsibilities
//! - Start a session against a running WebDriver server (chromedriver,
//!   geckodriver, Selenium) in headed or headless mode
//! - Translate port [`Locator`](courtbook_app::ports::Locator)s into CSS and
//!   XPath queries
//! - Wait for mandatory elements up to an action timeout, and probe optional
//!   ones without turning absence into an error
//! - Close the session
//!
//! ## Dependency rule
//! Depends on `courtbook-app` (port traits) and `courtbook-domain` only.

pub mod config;
pub mod error;
mod locator;
mod page;

pub use config::{Browser, WebDriverConfig};
pub use error::WebDriverError;
pub use page::WebDriverPage;
