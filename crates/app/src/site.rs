//! Layout of the club-management site: where things are and what they say.
//!
//! Everything that depends on the booking page's markup lives here so the
//! services read as a sequence of steps and adapters can recognise the same
//! locators.

use crate::ports::Locator;

/// Club Automation entry point (login page).
pub const BASE_URL: &str = "https://centrecourt.clubautomation.com/";

pub const USERNAME_TEST_ID: &str = "loginAccountUsername";
pub const PASSWORD_TEST_ID: &str = "loginAccountPassword";
pub const LOGIN_SUBMIT_TEST_ID: &str = "loginFormSubmitButton";

pub const RESERVE_LINK: &str = "Reserve a Court";
pub const LOG_OUT_LINK: &str = "Log Out";

/// Category pre-selected by the form, clicked to open and clear the picker.
pub const DEFAULT_CATEGORY: &str = "Racquetball";
pub const COMPONENT_SCOPE: &str = "#component_chosen";
pub const COMPONENT: &str = "Tennis";

/// Surface pre-selected by the form.
pub const DEFAULT_SURFACE: &str = "All Surfaces";
pub const SURFACE_SCOPE: &str = "#surface_chosen";
pub const SURFACE: &str = "Pickleball";

pub const TIME_FROM_SCOPE: &str = "#timeFrom_chosen";
pub const TIME_FROM_TOGGLE: &str = "#timeFrom_chosen a";
pub const TIME_FROM: &str = "12:00 AM";
pub const TIME_TO_SCOPE: &str = "#timeTo_chosen";
pub const TIME_TO_TOGGLE: &str = "#timeTo_chosen a";
pub const TIME_TO: &str = "11:00 PM";

pub const DATE_FIELD: &str = "#date";

pub const SEARCH_BUTTON: &str = "Search";
pub const CONFIRM_BUTTON: &str = "Confirm";
pub const ACKNOWLEDGE_BUTTON: &str = "Ok";

/// Message the results page shows when nothing at all can be booked.
pub const NO_AVAILABILITY_TEXT: &str = "No available times";

#[must_use]
pub fn username_field() -> Locator {
    Locator::test_id(USERNAME_TEST_ID)
}

#[must_use]
pub fn password_field() -> Locator {
    Locator::test_id(PASSWORD_TEST_ID)
}

#[must_use]
pub fn login_submit() -> Locator {
    Locator::test_id(LOGIN_SUBMIT_TEST_ID)
}

#[must_use]
pub fn reserve_link() -> Locator {
    Locator::link(RESERVE_LINK)
}

#[must_use]
pub fn log_out_link() -> Locator {
    Locator::link(LOG_OUT_LINK)
}

#[must_use]
pub fn default_category() -> Locator {
    Locator::css_with_text("a", DEFAULT_CATEGORY)
}

#[must_use]
pub fn component_option() -> Locator {
    Locator::text_within(COMPONENT_SCOPE, COMPONENT)
}

#[must_use]
pub fn default_surface() -> Locator {
    Locator::css_with_text("a", DEFAULT_SURFACE)
}

#[must_use]
pub fn surface_option() -> Locator {
    Locator::text_within(SURFACE_SCOPE, SURFACE)
}

#[must_use]
pub fn time_from_toggle() -> Locator {
    Locator::css(TIME_FROM_TOGGLE)
}

#[must_use]
pub fn time_from_option() -> Locator {
    Locator::text_within(TIME_FROM_SCOPE, TIME_FROM)
}

#[must_use]
pub fn time_to_toggle() -> Locator {
    Locator::css(TIME_TO_TOGGLE)
}

#[must_use]
pub fn time_to_option() -> Locator {
    Locator::text_within(TIME_TO_SCOPE, TIME_TO)
}

#[must_use]
pub fn date_field() -> Locator {
    Locator::css(DATE_FIELD)
}

/// Duration radio/label, e.g. `"120 Min"`.
#[must_use]
pub fn duration_option(label: &str) -> Locator {
    Locator::text(label)
}

#[must_use]
pub fn search_button() -> Locator {
    Locator::button(SEARCH_BUTTON)
}

/// Result link for a time label, e.g. `"6:00pm"`.
#[must_use]
pub fn time_slot(label: &str) -> Locator {
    Locator::link(label)
}

#[must_use]
pub fn no_availability() -> Locator {
    Locator::text(NO_AVAILABILITY_TEXT)
}

#[must_use]
pub fn confirm_button() -> Locator {
    Locator::button(CONFIRM_BUTTON)
}

#[must_use]
pub fn acknowledge_button() -> Locator {
    Locator::button(ACKNOWLEDGE_BUTTON)
}
