//! Clock gate — hold the run until courts are released for booking.

use std::time::Duration;

use chrono::{NaiveDate, Timelike};
use chrono_tz::Tz;
use courtbook_domain::run_log::RunLog;

use crate::ports::Clock;
use crate::services::note;

/// When courts are released, and how often to look at the clock meanwhile.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Local hour (0–23) at which bookings open.
    pub release_hour: u32,
    /// Timezone of the club.
    pub timezone: Tz,
    /// Delay between two clock readings.
    pub poll_interval: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            release_hour: 7,
            timezone: chrono_tz::America::Toronto,
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Blocks until the club's local time reaches the release hour.
pub struct ClockGate<C> {
    clock: C,
    config: GateConfig,
}

impl<C: Clock> ClockGate<C> {
    /// Create a new gate reading time from `clock`.
    pub fn new(clock: C, config: GateConfig) -> Self {
        Self { clock, config }
    }

    /// Timezone of the club.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.config.timezone
    }

    /// Calendar date at the club right now.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock
            .now()
            .with_timezone(&self.config.timezone)
            .date_naive()
    }

    /// Whether the local hour has reached the release hour.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.clock.now().with_timezone(&self.config.timezone).hour() >= self.config.release_hour
    }

    /// Wait for the release hour, polling at the configured interval.
    ///
    /// Returns at once in test mode. Never fails and has no upper bound.
    #[tracing::instrument(skip(self, log), fields(release_hour = self.config.release_hour))]
    pub async fn wait_until_release(&self, test_mode: bool, log: &mut RunLog) {
        let hour = self.config.release_hour;
        if test_mode {
            note(
                log,
                &self.clock,
                format!("Test mode: skipping wait until {hour:02}:00"),
            );
            return;
        }
        if self.is_open() {
            return;
        }

        note(
            log,
            &self.clock,
            format!(
                "Waiting until {hour:02}:00 ({}) to submit",
                self.config.timezone
            ),
        );
        while !self.is_open() {
            tokio::time::sleep(self.config.poll_interval).await;
        }
        note(
            log,
            &self.clock,
            format!("It is {hour:02}:00, courts are released"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use courtbook_domain::time::Timestamp;

    /// Wall clock that advances with tokio's (pausable) clock.
    struct PausedClock {
        start: Timestamp,
        origin: tokio::time::Instant,
    }

    impl PausedClock {
        /// Start at the given Toronto local time.
        fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Self {
            let start = chrono_tz::America::Toronto
                .with_ymd_and_hms(y, m, d, h, min, s)
                .unwrap()
                .with_timezone(&chrono::Utc);
            Self {
                start,
                origin: tokio::time::Instant::now(),
            }
        }
    }

    impl Clock for PausedClock {
        fn now(&self) -> Timestamp {
            self.start + chrono::Duration::from_std(self.origin.elapsed()).unwrap()
        }
    }

    fn gate(clock: PausedClock) -> ClockGate<PausedClock> {
        ClockGate::new(clock, GateConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn should_return_immediately_in_test_mode_before_release_hour() {
        let gate = gate(PausedClock::local(2026, 10, 17, 5, 0, 0));
        let started = tokio::time::Instant::now();
        let mut log = RunLog::new();

        gate.wait_until_release(true, &mut log).await;

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(
            log.messages().collect::<Vec<_>>(),
            vec!["Test mode: skipping wait until 07:00"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_wait_until_local_release_hour() {
        let gate = gate(PausedClock::local(2026, 10, 17, 6, 58, 30));
        let started = tokio::time::Instant::now();
        let mut log = RunLog::new();

        gate.wait_until_release(false, &mut log).await;

        let waited = started.elapsed();
        assert!(waited >= Duration::from_secs(90), "waited {waited:?}");
        assert!(waited < Duration::from_secs(92), "waited {waited:?}");
        assert!(gate.is_open());
        assert_eq!(log.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_wait_when_release_hour_already_passed() {
        let gate = gate(PausedClock::local(2026, 10, 17, 7, 30, 0));
        let started = tokio::time::Instant::now();
        let mut log = RunLog::new();

        gate.wait_until_release(false, &mut log).await;

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(log.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_honor_configured_poll_interval() {
        let clock = PausedClock::local(2026, 10, 17, 6, 59, 59);
        let gate = ClockGate::new(
            clock,
            GateConfig {
                poll_interval: Duration::from_secs(10),
                ..GateConfig::default()
            },
        );
        let started = tokio::time::Instant::now();

        gate.wait_until_release(false, &mut RunLog::new()).await;

        assert_eq!(started.elapsed(), Duration::from_secs(10));
    }

    #[test]
    fn should_compute_today_in_club_timezone() {
        // 02:00 UTC on the 18th is still the 17th in Toronto
        let clock = crate::services::testing::FixedClock::at(2026, 10, 18, 2, 0);
        let gate = ClockGate::new(clock, GateConfig::default());
        assert_eq!(gate.today(), NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    }

    #[test]
    fn should_be_open_exactly_at_release_hour() {
        // 11:00 UTC is 07:00 in Toronto during daylight saving time
        let clock = crate::services::testing::FixedClock::at(2026, 10, 17, 11, 0);
        let gate = ClockGate::new(clock, GateConfig::default());
        assert!(gate.is_open());
    }
}
