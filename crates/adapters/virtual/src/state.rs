//! Screen-by-screen model of the club booking site.

use courtbook_app::ports::{Locator, Role};
use courtbook_app::site;

use crate::config::VirtualSiteConfig;
use crate::error::VirtualSiteError;

/// A confirmed reservation on the virtual site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Date as typed in the form (`MM/DD/YYYY`).
    pub date: String,
    pub duration_minutes: u16,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Blank,
    Login,
    Home,
    Reservation,
}

impl Screen {
    fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Login => "login",
            Self::Home => "home",
            Self::Reservation => "reservation",
        }
    }
}

/// Something on the current screen a locator can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Element {
    UsernameField,
    PasswordField,
    LoginSubmit,
    ReserveLink,
    LogOutLink,
    /// Opens a chosen-style picker; no effect on its own.
    Picker,
    Component,
    Surface,
    TimeFrom,
    TimeTo,
    DateField,
    Duration(u16),
    Search,
    Slot(String),
    NoAvailability,
    Confirm,
    Acknowledge,
}

#[derive(Debug, Default)]
struct Form {
    component: bool,
    surface: bool,
    time_from: bool,
    time_to: bool,
    date: Option<String>,
    duration: Option<u16>,
    /// `None` until searched.
    results: Option<Vec<String>>,
    selected: Option<String>,
}

#[derive(Debug)]
pub(crate) struct SiteState {
    screen: Screen,
    username: String,
    password: String,
    logged_in: bool,
    form: Form,
    dialog_open: bool,
    availability: VirtualSiteConfig,
    bookings: Vec<Booking>,
}

impl SiteState {
    pub(crate) fn new(availability: VirtualSiteConfig) -> Self {
        Self {
            screen: Screen::Blank,
            username: String::new(),
            password: String::new(),
            logged_in: false,
            form: Form::default(),
            dialog_open: false,
            availability,
            bookings: Vec::new(),
        }
    }

    pub(crate) fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub(crate) fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub(crate) fn goto(&mut self) {
        self.screen = Screen::Login;
        self.logged_in = false;
        self.username.clear();
        self.password.clear();
        self.form = Form::default();
        self.dialog_open = false;
    }

    pub(crate) fn is_present(&self, locator: &Locator) -> bool {
        self.locate(locator).is_some()
    }

    pub(crate) fn click(&mut self, locator: &Locator) -> Result<(), VirtualSiteError> {
        let element = self.require(locator)?;
        self.activate(element, locator)
    }

    pub(crate) fn fill(&mut self, locator: &Locator, text: &str) -> Result<(), VirtualSiteError> {
        match self.require(locator)? {
            Element::UsernameField => self.username = text.to_string(),
            Element::PasswordField => self.password = text.to_string(),
            Element::DateField => {
                self.form.date = Some(text.to_string());
                self.form.results = None;
                self.form.selected = None;
            }
            _ => return Err(not_usable(locator, "not a text field")),
        }
        Ok(())
    }

    pub(crate) fn press(&self, locator: &Locator) -> Result<(), VirtualSiteError> {
        self.require(locator).map(|_| ())
    }

    fn require(&self, locator: &Locator) -> Result<Element, VirtualSiteError> {
        self.locate(locator)
            .ok_or_else(|| VirtualSiteError::ElementNotFound {
                screen: self.screen.name(),
                locator: locator.to_string(),
            })
    }

    fn locate(&self, locator: &Locator) -> Option<Element> {
        if self.dialog_open {
            return (*locator == site::acknowledge_button()).then_some(Element::Acknowledge);
        }
        match self.screen {
            Screen::Blank => None,
            Screen::Login => fixed(
                locator,
                [
                    (site::username_field(), Element::UsernameField),
                    (site::password_field(), Element::PasswordField),
                    (site::login_submit(), Element::LoginSubmit),
                ],
            ),
            Screen::Home => navigation(locator),
            Screen::Reservation => navigation(locator)
                .or_else(|| form_control(locator))
                .or_else(|| self.result(locator)),
        }
    }

    fn result(&self, locator: &Locator) -> Option<Element> {
        let results = self.form.results.as_ref()?;
        if *locator == site::no_availability() {
            return results.is_empty().then_some(Element::NoAvailability);
        }
        if *locator == site::confirm_button() {
            return self.form.selected.as_ref().map(|_| Element::Confirm);
        }
        match locator {
            Locator::Role {
                role: Role::Link,
                name,
            } if results.contains(name) => Some(Element::Slot(name.clone())),
            _ => None,
        }
    }

    fn activate(&mut self, element: Element, locator: &Locator) -> Result<(), VirtualSiteError> {
        match element {
            Element::LoginSubmit => {
                if self.username.is_empty() || self.password.is_empty() {
                    return Err(not_usable(locator, "username and password are required"));
                }
                self.logged_in = true;
                self.screen = Screen::Home;
                tracing::debug!(username = %self.username, "virtual login");
            }
            Element::ReserveLink => {
                self.screen = Screen::Reservation;
                self.form = Form::default();
            }
            Element::LogOutLink => self.goto(),
            Element::Component => self.form.component = true,
            Element::Surface => self.form.surface = true,
            Element::TimeFrom => self.form.time_from = true,
            Element::TimeTo => self.form.time_to = true,
            Element::Duration(minutes) => {
                self.form.duration = Some(minutes);
                self.form.results = None;
                self.form.selected = None;
            }
            Element::Search => self.search(locator)?,
            Element::Slot(time) => self.form.selected = Some(time),
            Element::Confirm => self.book(),
            Element::Acknowledge => self.dialog_open = false,
            Element::UsernameField
            | Element::PasswordField
            | Element::Picker
            | Element::DateField
            | Element::NoAvailability => {}
        }
        Ok(())
    }

    fn search(&mut self, locator: &Locator) -> Result<(), VirtualSiteError> {
        let form = &mut self.form;
        if !(form.component && form.surface && form.time_from && form.time_to) {
            return Err(not_usable(locator, "court type and time range are required"));
        }
        let (Some(_), Some(duration)) = (&form.date, form.duration) else {
            return Err(not_usable(locator, "date and duration are required"));
        };
        form.results = Some(self.availability.times_for(duration));
        form.selected = None;
        Ok(())
    }

    fn book(&mut self) {
        let (Some(date), Some(duration), Some(time)) = (
            self.form.date.clone(),
            self.form.duration,
            self.form.selected.take(),
        ) else {
            return;
        };
        for offer in &mut self.availability.slots {
            if offer.duration == duration {
                offer.times.retain(|t| *t != time);
            }
        }
        tracing::debug!(%date, duration, %time, "virtual booking confirmed");
        self.bookings.push(Booking {
            date,
            duration_minutes: duration,
            time,
        });
        self.form.results = None;
        self.dialog_open = true;
    }
}

fn fixed<const N: usize>(locator: &Locator, table: [(Locator, Element); N]) -> Option<Element> {
    table
        .into_iter()
        .find_map(|(candidate, element)| (candidate == *locator).then_some(element))
}

fn navigation(locator: &Locator) -> Option<Element> {
    fixed(
        locator,
        [
            (site::reserve_link(), Element::ReserveLink),
            (site::log_out_link(), Element::LogOutLink),
        ],
    )
}

fn form_control(locator: &Locator) -> Option<Element> {
    if let Locator::Text(label) = locator {
        if let Some(minutes) = parse_duration_label(label) {
            return Some(Element::Duration(minutes));
        }
    }
    fixed(
        locator,
        [
            (site::default_category(), Element::Picker),
            (site::component_option(), Element::Component),
            (site::default_surface(), Element::Picker),
            (site::surface_option(), Element::Surface),
            (site::time_from_toggle(), Element::Picker),
            (site::time_from_option(), Element::TimeFrom),
            (site::time_to_toggle(), Element::Picker),
            (site::time_to_option(), Element::TimeTo),
            (site::date_field(), Element::DateField),
            (site::search_button(), Element::Search),
        ],
    )
}

fn parse_duration_label(label: &str) -> Option<u16> {
    label.strip_suffix(" Min")?.parse().ok()
}

fn not_usable(locator: &Locator, reason: &'static str) -> VirtualSiteError {
    VirtualSiteError::NotUsable {
        locator: locator.to_string(),
        reason,
    }
}
