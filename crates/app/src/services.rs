//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! The page is borrowed per call since it belongs to the session, not the service.

pub mod clock_gate;
pub mod orchestrator;
pub mod reporter;
pub mod reservation;
pub mod session;
pub mod slot_selector;

#[cfg(test)]
pub(crate) mod testing;

use courtbook_domain::run_log::RunLog;

use crate::ports::Clock;

/// Append a status line to the run log and mirror it to tracing.
pub(crate) fn note(log: &mut RunLog, clock: &impl Clock, message: impl Into<String>) {
    let message = message.into();
    tracing::info!(run_id = %log.run_id(), "{message}");
    log.record(clock.now(), message);
}
