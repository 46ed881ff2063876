//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CourtBookError`] via `#[from]` or an explicit `into_domain()`.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum CourtBookError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The browser driver failed on a mandatory step (navigation, form fill, click).
    #[error("browser driver error")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The outbound mail relay rejected or failed to deliver a report.
    #[error("mail delivery error")]
    Mail(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A duration of zero minutes cannot be booked.
    #[error("duration must be greater than zero minutes")]
    ZeroDuration,

    /// The fallback duration repeats the primary one.
    #[error("fallback duration {0} min is the same as the primary duration")]
    DuplicateDuration(u16),

    /// No duration was configured at all.
    #[error("at least one duration is required")]
    NoDuration,

    /// More durations than the single fallback allows.
    #[error("at most two durations are supported, got {0}")]
    TooManyDurations(usize),
}
