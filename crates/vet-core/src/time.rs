//! Duration shorthands

use std::time::Duration;

pub fn days(n: u64) -> Duration {
    hours(n.saturating_mul(24))
}

pub fn hours(n: u64) -> Duration {
    minutes(n.saturating_mul(60))
}

pub fn minutes(n: u64) -> Duration {
    seconds(n.saturating_mul(60))
}

pub fn seconds(n: u64) -> Duration {
    Duration::from_secs(n)
}

/// Milliseconds in `n` days
pub fn days_ms(n: u64) -> u128 {
    days(n).as_millis()
}

pub fn hours_ms(n: u64) -> u128 {
    hours(n).as_millis()
}

pub fn minutes_ms(n: u64) -> u128 {
    minutes(n).as_millis()
}

pub fn seconds_ms(n: u64) -> u128 {
    seconds(n).as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        assert_eq!(days(1), Duration::from_secs(86_400));
        assert_eq!(hours(2), minutes(120));
        assert_eq!(seconds(0), Duration::ZERO);
    }

    #[test]
    fn test_milliseconds() {
        assert_eq!(days_ms(1), 86_400_000);
        assert_eq!(hours_ms(1), 3_600_000);
        assert_eq!(minutes_ms(3), 180_000);
        assert_eq!(seconds_ms(5), 5_000);
    }

    #[test]
    fn test_large_counts_saturate() {
        assert_eq!(days(u64::MAX), Duration::from_secs(u64::MAX));
        assert_eq!(minutes(u64::MAX / 2), Duration::from_secs(u64::MAX));
        assert_eq!(hours_ms(u64::MAX), u64::MAX as u128 * 1000);
    }
}
