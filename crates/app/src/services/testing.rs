//! Test doubles shared by the service tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use chrono::TimeZone;
use courtbook_domain::error::CourtBookError;
use courtbook_domain::time::Timestamp;

use crate::ports::{Clock, ElementLookup, Key, Locator, Page, Role};
use crate::site;

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Self {
        Self(chrono::Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[derive(Debug)]
struct PageState {
    duration: Option<String>,
    searched: bool,
    selected: bool,
    confirmed: u32,
    actions: Vec<String>,
    slot_probes: Vec<String>,
}

/// Scripted results page.
///
/// Slots are offered per duration label; a duration listed in
/// `no_availability` shows the explicit "nothing to book" message once that
/// many slot probes have been made.
#[derive(Debug)]
pub struct ScriptedPage {
    slots: HashMap<String, Vec<String>>,
    no_availability: HashMap<String, usize>,
    confirm_offered: bool,
    broken: Option<Locator>,
    state: Mutex<PageState>,
}

impl Default for ScriptedPage {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            no_availability: HashMap::new(),
            confirm_offered: true,
            broken: None,
            state: Mutex::new(PageState {
                duration: None,
                searched: false,
                selected: false,
                confirmed: 0,
                actions: Vec::new(),
                slot_probes: Vec::new(),
            }),
        }
    }
}

impl ScriptedPage {
    pub fn with_slots(mut self, duration: &str, times: &[&str]) -> Self {
        self.slots.insert(
            duration.to_string(),
            times.iter().map(|t| (*t).to_string()).collect(),
        );
        self
    }

    pub fn with_no_availability(self, duration: &str) -> Self {
        self.with_no_availability_after(duration, 1)
    }

    /// The "nothing to book" message only shows after `probes` slot probes.
    pub fn with_no_availability_after(mut self, duration: &str, probes: usize) -> Self {
        self.no_availability.insert(duration.to_string(), probes);
        self
    }

    pub fn without_confirm(mut self) -> Self {
        self.confirm_offered = false;
        self
    }

    /// Any action on `locator` fails with a driver error.
    pub fn broken_at(mut self, locator: Locator) -> Self {
        self.broken = Some(locator);
        self
    }

    pub fn actions(&self) -> Vec<String> {
        self.state.lock().unwrap().actions.clone()
    }

    pub fn slot_probes(&self) -> Vec<String> {
        self.state.lock().unwrap().slot_probes.clone()
    }

    pub fn confirmed(&self) -> u32 {
        self.state.lock().unwrap().confirmed
    }

    fn check(&self, locator: &Locator) -> Result<(), CourtBookError> {
        if self.broken.as_ref() == Some(locator) {
            return Err(CourtBookError::Driver(
                format!("element not found: {locator}").into(),
            ));
        }
        Ok(())
    }

    fn act(&self, locator: &Locator) {
        let mut state = self.state.lock().unwrap();
        state.actions.push(locator.to_string());
        match locator {
            Locator::Text(label) if label.ends_with(" Min") => {
                state.duration = Some(label.clone());
            }
            l if *l == site::reserve_link() => {
                state.searched = false;
                state.selected = false;
                state.duration = None;
            }
            l if *l == site::search_button() => state.searched = true,
            l if *l == site::confirm_button() => {
                if state.selected && self.confirm_offered {
                    state.confirmed += 1;
                    state.selected = false;
                }
            }
            _ => {}
        }
    }

    fn slot_offered(&self, state: &PageState, time: &str) -> bool {
        state.searched
            && state
                .duration
                .as_ref()
                .and_then(|d| self.slots.get(d))
                .is_some_and(|times| times.iter().any(|t| t == time))
    }
}

impl Page for ScriptedPage {
    fn goto(&self, url: &str) -> impl Future<Output = Result<(), CourtBookError>> + Send {
        self.state.lock().unwrap().actions.push(format!("goto {url}"));
        async { Ok(()) }
    }

    fn click(&self, locator: &Locator) -> impl Future<Output = Result<(), CourtBookError>> + Send {
        let result = self.check(locator).map(|()| self.act(locator));
        async { result }
    }

    fn fill(
        &self,
        locator: &Locator,
        text: &str,
    ) -> impl Future<Output = Result<(), CourtBookError>> + Send {
        let result = self.check(locator).map(|()| {
            self.state
                .lock()
                .unwrap()
                .actions
                .push(format!("fill {locator} with {text:?}"));
        });
        async { result }
    }

    fn press(
        &self,
        locator: &Locator,
        key: Key,
    ) -> impl Future<Output = Result<(), CourtBookError>> + Send {
        let result = self.check(locator).map(|()| {
            self.state
                .lock()
                .unwrap()
                .actions
                .push(format!("press {key:?} on {locator}"));
        });
        async { result }
    }

    fn click_within(
        &self,
        locator: &Locator,
        _timeout: Duration,
    ) -> impl Future<Output = Result<ElementLookup, CourtBookError>> + Send {
        let result = self.check(locator).map(|()| {
            let mut state = self.state.lock().unwrap();
            match locator {
                l if *l == site::acknowledge_button() || *l == site::log_out_link() => {
                    state.actions.push(l.to_string());
                    ElementLookup::Found
                }
                Locator::Role {
                    role: Role::Link,
                    name,
                } => {
                    state.slot_probes.push(name.clone());
                    if self.slot_offered(&state, name) {
                        state.selected = true;
                        state.actions.push(locator.to_string());
                        ElementLookup::Found
                    } else {
                        ElementLookup::TimedOut
                    }
                }
                _ => ElementLookup::TimedOut,
            }
        });
        async move { result }
    }

    fn wait_visible(
        &self,
        locator: &Locator,
        _timeout: Duration,
    ) -> impl Future<Output = Result<ElementLookup, CourtBookError>> + Send {
        let state = self.state.lock().unwrap();
        let lookup = if *locator == site::confirm_button() && state.selected && self.confirm_offered
        {
            ElementLookup::Found
        } else {
            ElementLookup::TimedOut
        };
        async move { Ok(lookup) }
    }

    fn is_visible(
        &self,
        locator: &Locator,
    ) -> impl Future<Output = Result<bool, CourtBookError>> + Send {
        let state = self.state.lock().unwrap();
        let visible = *locator == site::no_availability()
            && state.searched
            && state
                .duration
                .as_ref()
                .and_then(|d| self.no_availability.get(d))
                .is_some_and(|after| state.slot_probes.len() >= *after);
        async move { Ok(visible) }
    }
}
