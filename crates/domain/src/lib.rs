//! # courtbook-domain
//!
//! Pure domain model for the courtbook court reservation bot.
//!
//! ## Responsibilities
//! - Foundational types: run identifiers, error conventions, timestamps
//! - Calendar rules: the booking horizon and the date format the club form expects
//! - Define the **ReservationRequest** (target date, duration plan, preferred times)
//! - Define **slot** rules (weekday and weekend preferred-time windows)
//! - Define **attempt** outcomes and the aggregated **run** outcome
//! - Define the append-only **RunLog** and the **Report** built from it
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod attempt;
pub mod calendar;
pub mod report;
pub mod request;
pub mod run_log;
pub mod slot;
