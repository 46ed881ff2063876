//! Translation of port locators into WebDriver queries.

use courtbook_app::ports::{Locator, Role};

/// How to look an element up over WebDriver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Query {
    Css(String),
    XPath(String),
    /// Every match of `css`, keeping the first whose text contains `text`.
    CssWithText { css: String, text: String },
    /// `xpath` evaluated relative to the first match of `scope`.
    Scoped { scope: String, xpath: String },
}

impl From<&Locator> for Query {
    fn from(locator: &Locator) -> Self {
        match locator {
            Locator::Role {
                role: Role::Button,
                name,
            } => {
                let name = xpath_literal(name);
                Self::XPath(format!(
                    "//button[normalize-space(.)={name}] \
                     | //input[(@type='submit' or @type='button') and @value={name}] \
                     | //*[@role='button' and normalize-space(.)={name}]"
                ))
            }
            Locator::Role {
                role: Role::Link,
                name,
            } => {
                let name = xpath_literal(name);
                Self::XPath(format!(
                    "//a[normalize-space(.)={name}] | //*[@role='link' and normalize-space(.)={name}]"
                ))
            }
            Locator::TestId(id) => Self::Css(format!("[data-testid=\"{}\"]", css_escape(id))),
            Locator::Text(text) => Self::XPath(format!("//*{}", own_text_contains(text))),
            Locator::Css(css) => Self::Css(css.clone()),
            Locator::CssWithText { css, text } => Self::CssWithText {
                css: css.clone(),
                text: text.clone(),
            },
            Locator::TextWithin { scope, text } => Self::Scoped {
                scope: scope.clone(),
                xpath: format!(".//*{}", own_text_contains(text)),
            },
        }
    }
}

/// Predicate matching elements with a direct text node containing `text`.
fn own_text_contains(text: &str) -> String {
    format!(
        "[text()[contains(normalize-space(.), {})]]",
        xpath_literal(text)
    )
}

/// Quote a string for use inside an XPath expression.
fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    let parts: Vec<String> = value.split('\'').map(|p| format!("'{p}'")).collect();
    format!("concat({})", parts.join(", \"'\", "))
}

fn css_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
