//! Wiring for the `courtbook` binary, exposed as a library so the
//! end-to-end tests can drive a full run against the virtual site.

pub mod config;
pub mod run;
