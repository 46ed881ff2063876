//! # courtbook-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Page` — the live browser page the reservation flow drives
//!   - `Mailer` — outbound delivery of the run report
//!   - `Clock` — the current time, injected so tests control "today" and "7am"
//! - Describe the club site's **layout** (locators, labels) in one place
//! - Define the **use-cases**:
//!   - `ClockGate` — hold submission until the release hour
//!   - `SlotSelector` — walk the preferred times on a results page
//!   - `ReservationAttempt` — one full search-select-confirm pass
//!   - `AttemptOrchestrator` — primary duration, then one fallback
//!   - `Reporter` — email the run log
//!   - `session` — login and logout
//!
//! ## Dependency rule
//! Depends on `courtbook-domain` only (plus `tokio::time` for waiting).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod site;
