//! Time utilities for studymate
//!
//! Provides monotonic time (for elapsed-time accounting) and wall-clock
//! minute-of-day arithmetic (for schedule previews), plus the duration
//! formatting used across the app.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Represents a point in monotonic time for elapsed-time accounting.
/// This is immune to wall-clock changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonotonicInstant(Instant);

impl MonotonicInstant {
    pub fn now() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    pub fn duration_since(&self, earlier: MonotonicInstant) -> Duration {
        self.0.duration_since(earlier.0)
    }

    /// Returns duration since `earlier`, or zero if `earlier` is in the future
    pub fn saturating_duration_since(&self, earlier: MonotonicInstant) -> Duration {
        if self.0 > earlier.0 {
            self.0.duration_since(earlier.0)
        } else {
            Duration::ZERO
        }
    }
}

impl std::ops::Add<Duration> for MonotonicInstant {
    type Output = MonotonicInstant;

    fn add(self, rhs: Duration) -> Self::Output {
        MonotonicInstant(self.0 + rhs)
    }
}

/// Wall-clock time of day, minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallClock {
    pub hour: u8,
    pub minute: u8,
}

impl WallClock {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Build from minutes since midnight, wrapping past midnight
    pub fn from_minute_of_day(minutes: u32) -> Self {
        let wrapped = minutes % (24 * 60);
        Self {
            hour: (wrapped / 60) as u8,
            minute: (wrapped % 60) as u8,
        }
    }

    /// Returns minutes since midnight
    pub fn as_minute_of_day(&self) -> u32 {
        (self.hour as u32) * 60 + self.minute as u32
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl PartialOrd for WallClock {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WallClock {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_minute_of_day().cmp(&other.as_minute_of_day())
    }
}

/// Format elapsed seconds as `HH:MM:SS` for the running timer display
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format seconds as `MM:SS` for the pomodoro countdown
pub fn format_mmss(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Format a minute total in the app's Korean display form:
/// "45분", "2시간", "1시간 30분"
pub fn format_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours == 0 {
        format!("{}분", minutes)
    } else if minutes == 0 {
        format!("{}시간", hours)
    } else {
        format!("{}시간 {}분", hours, minutes)
    }
}

/// Rounded percentage, 0 when the total is 0
pub fn percentage(value: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((value as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_instant() {
        let t1 = MonotonicInstant::now();
        std::thread::sleep(Duration::from_millis(10));
        let t2 = MonotonicInstant::now();

        assert!(t2 > t1);
        assert!(t2.duration_since(t1) >= Duration::from_millis(10));
    }

    #[test]
    fn test_monotonic_add_and_saturation() {
        let t1 = MonotonicInstant::now();
        let t2 = t1 + Duration::from_secs(65);

        assert_eq!(t2.duration_since(t1), Duration::from_secs(65));
        assert_eq!(t1.saturating_duration_since(t2), Duration::ZERO);
    }

    #[test]
    fn test_wall_clock_ordering() {
        let morning = WallClock::new(8, 0).unwrap();
        let noon = WallClock::new(12, 0).unwrap();
        let evening = WallClock::new(18, 30).unwrap();

        assert!(morning < noon);
        assert!(noon < evening);
    }

    #[test]
    fn test_wall_clock_wraps_past_midnight() {
        let wc = WallClock::from_minute_of_day(23 * 60 + 50 + 30);
        assert_eq!(wc, WallClock::new(0, 20).unwrap());

        let wc = WallClock::from_minute_of_day(18 * 60);
        assert_eq!(wc.to_string(), "18:00");
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3661), "01:01:01");
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(25 * 60), "25:00");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45분");
        assert_eq!(format_minutes(120), "2시간");
        assert_eq!(format_minutes(90), "1시간 30분");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(50, 50), 100);
    }
}
