//! Timestamps and how they read on the club's wall clock.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// UTC instant used for run log entries and clock readings.
pub type Timestamp = DateTime<Utc>;

/// `at` as `HH:MM:SS` in `zone`.
#[must_use]
pub fn wall_clock(at: Timestamp, zone: Tz) -> String {
    at.with_timezone(&zone).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_render_release_instant_in_club_time() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 11, 0, 1).unwrap();
        assert_eq!(wall_clock(at, chrono_tz::America::Toronto), "07:00:01");
        assert_eq!(wall_clock(at, Tz::UTC), "11:00:01");
    }

    #[test]
    fn should_follow_daylight_saving_changes() {
        let winter = Utc.with_ymd_and_hms(2026, 12, 1, 12, 0, 0).unwrap();
        assert_eq!(wall_clock(winter, chrono_tz::America::Toronto), "07:00:00");
    }
}
