//! Page port — the live browser page the reservation flow drives.
//!
//! Mandatory interactions ([`click`](Page::click), [`fill`](Page::fill), …)
//! fail with [`CourtBookError::Driver`] when the element never shows up.
//! Optional affordances are probed with [`click_within`](Page::click_within)
//! and [`wait_visible`](Page::wait_visible), which report absence as an
//! [`ElementLookup`] instead of an error.

use std::future::Future;
use std::time::Duration;

use courtbook_domain::error::CourtBookError;

/// Accessible role used by role-based locators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Button,
    Link,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Button => f.write_str("button"),
            Self::Link => f.write_str("link"),
        }
    }
}

/// How to find an element on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Element with an accessible role and exact visible name.
    Role { role: Role, name: String },
    /// Element carrying `data-testid="…"`.
    TestId(String),
    /// First element whose own text contains the given string.
    Text(String),
    /// First element matching a CSS selector.
    Css(String),
    /// First element matching `css` whose text contains `text`.
    CssWithText { css: String, text: String },
    /// First element containing `text` inside the element matching `scope`.
    TextWithin { scope: String, text: String },
}

impl Locator {
    #[must_use]
    pub fn button(name: impl Into<String>) -> Self {
        Self::Role {
            role: Role::Button,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn link(name: impl Into<String>) -> Self {
        Self::Role {
            role: Role::Link,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    #[must_use]
    pub fn css_with_text(css: impl Into<String>, text: impl Into<String>) -> Self {
        Self::CssWithText {
            css: css.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn text_within(scope: impl Into<String>, text: impl Into<String>) -> Self {
        Self::TextWithin {
            scope: scope.into(),
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Role { role, name } => write!(f, "{role} {name:?}"),
            Self::TestId(id) => write!(f, "test-id {id:?}"),
            Self::Text(text) => write!(f, "text {text:?}"),
            Self::Css(css) => write!(f, "css {css:?}"),
            Self::CssWithText { css, text } => write!(f, "css {css:?} with text {text:?}"),
            Self::TextWithin { scope, text } => write!(f, "text {text:?} within {scope:?}"),
        }
    }
}

/// Keys that can be pressed on a focused element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
}

/// Result of probing for an optional element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementLookup {
    /// The element was there (and, for clicks, was clicked).
    Found,
    /// The element is not on the page.
    NotFound,
    /// The element did not appear within the allotted time.
    TimedOut,
}

impl ElementLookup {
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found)
    }
}

/// A live page in an authenticated browser session.
pub trait Page {
    /// Navigate to `url`.
    fn goto(&self, url: &str) -> impl Future<Output = Result<(), CourtBookError>> + Send;

    /// Click an element that must exist.
    fn click(&self, locator: &Locator) -> impl Future<Output = Result<(), CourtBookError>> + Send;

    /// Replace the contents of a text field that must exist.
    fn fill(
        &self,
        locator: &Locator,
        text: &str,
    ) -> impl Future<Output = Result<(), CourtBookError>> + Send;

    /// Press a key on an element that must exist.
    fn press(
        &self,
        locator: &Locator,
        key: Key,
    ) -> impl Future<Output = Result<(), CourtBookError>> + Send;

    /// Click an element if it shows up within `timeout`.
    fn click_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> impl Future<Output = Result<ElementLookup, CourtBookError>> + Send;

    /// Wait up to `timeout` for an element to be visible.
    fn wait_visible(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> impl Future<Output = Result<ElementLookup, CourtBookError>> + Send;

    /// Whether an element is visible right now, without waiting.
    fn is_visible(
        &self,
        locator: &Locator,
    ) -> impl Future<Output = Result<bool, CourtBookError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_role_locators() {
        assert_eq!(
            Locator::button("Confirm"),
            Locator::Role {
                role: Role::Button,
                name: "Confirm".to_string()
            }
        );
        assert_eq!(
            Locator::link("6:00pm"),
            Locator::Role {
                role: Role::Link,
                name: "6:00pm".to_string()
            }
        );
    }

    #[test]
    fn should_display_locator_for_logs() {
        assert_eq!(Locator::button("Search").to_string(), "button \"Search\"");
        assert_eq!(
            Locator::text_within("#surface_chosen", "Pickleball").to_string(),
            "text \"Pickleball\" within \"#surface_chosen\""
        );
    }

    #[test]
    fn should_only_report_found_as_found() {
        assert!(ElementLookup::Found.is_found());
        assert!(!ElementLookup::NotFound.is_found());
        assert!(!ElementLookup::TimedOut.is_found());
    }
}
