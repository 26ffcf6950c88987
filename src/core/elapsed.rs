//! Splits the life of a loan into whole 30-day months and leftover days.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Length of a billing month. Calendar months are not used.
pub const DAYS_PER_MONTH: u64 = 30;

/// Whether the start day itself is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCount {
    /// A loan started today counts as one day.
    #[default]
    Inclusive,
    /// Only whole elapsed days count; a loan started today counts as zero.
    Elapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElapsedTime {
    pub total_days: u64,
    pub whole_months: u64,
    pub leftover_days: u32,
}

impl ElapsedTime {
    /// Decomposes a day count. Non-positive counts give the zero state.
    pub fn from_total_days(total_days: i64) -> Self {
        if total_days <= 0 {
            return Self::default();
        }
        let total_days = total_days as u64;
        Self {
            total_days,
            whole_months: total_days / DAYS_PER_MONTH,
            // always < 30
            leftover_days: (total_days % DAYS_PER_MONTH) as u32,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_days == 0
    }
}

/// Time charged between `start` and the evaluation date `today`.
pub fn decompose(start: NaiveDate, today: NaiveDate, day_count: DayCount) -> ElapsedTime {
    let elapsed = today.signed_duration_since(start).num_days();
    let total_days = match day_count {
        DayCount::Inclusive => elapsed + 1,
        DayCount::Elapsed => elapsed,
    };
    let time = ElapsedTime::from_total_days(total_days);
    debug!(
        "Loan from {start} to {today} ({day_count:?}): {} days = {} months + {} days",
        time.total_days, time.whole_months, time.leftover_days
    );
    time
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_started_today_counts_one_day() {
        let today = date(2024, 6, 15);
        let time = decompose(today, today, DayCount::Inclusive);
        assert_eq!(
            time,
            ElapsedTime {
                total_days: 1,
                whole_months: 0,
                leftover_days: 1
            }
        );
    }

    #[test]
    fn test_started_today_elapsed_counts_zero() {
        let today = date(2024, 6, 15);
        assert!(decompose(today, today, DayCount::Elapsed).is_zero());

        let yesterday = today - Duration::days(1);
        assert_eq!(decompose(yesterday, today, DayCount::Elapsed).total_days, 1);
    }

    #[test]
    fn test_thirty_day_months_ignore_calendar() {
        // February 2024 has 29 days; the month convention does not care.
        let start = date(2024, 2, 1);
        let today = date(2024, 3, 1);
        let time = decompose(start, today, DayCount::Inclusive);
        assert_eq!(time.total_days, 30);
        assert_eq!(time.whole_months, 1);
        assert_eq!(time.leftover_days, 0);
    }

    #[test]
    fn test_sixty_five_days() {
        let time = ElapsedTime::from_total_days(65);
        assert_eq!(time.whole_months, 2);
        assert_eq!(time.leftover_days, 5);
    }

    #[test]
    fn test_start_after_today_is_zero() {
        let today = date(2024, 6, 15);
        let tomorrow = today + Duration::days(1);
        assert!(decompose(tomorrow, today, DayCount::Inclusive).is_zero());
        assert!(decompose(tomorrow, today, DayCount::Elapsed).is_zero());
        assert!(ElapsedTime::from_total_days(-40).is_zero());
    }

    #[test]
    fn test_day_count_deserialization() {
        let inclusive: DayCount = serde_yaml::from_str("inclusive").unwrap();
        let elapsed: DayCount = serde_yaml::from_str("elapsed").unwrap();
        assert_eq!(inclusive, DayCount::Inclusive);
        assert_eq!(elapsed, DayCount::Elapsed);
        assert_eq!(DayCount::default(), DayCount::Inclusive);
    }
}
