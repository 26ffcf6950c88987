//! Strict `DD/MM/YYYY` date parsing.
//!
//! The accepted shape is fixed-width and zero-padded. Anything a permissive
//! parser might tolerate (single-digit parts, other separators, surrounding
//! whitespace) is rejected as a format error before any calendar check.
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/([0-9]{4})$")
        .expect("date pattern must compile")
});

/// Why a start date was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date does not match DD/MM/YYYY")]
    InvalidFormat,
    #[error("date does not exist in the calendar")]
    InvalidDate,
    #[error("date is after the evaluation date")]
    FutureDate,
}

/// Parses a `DD/MM/YYYY` string into a calendar date without comparing it to
/// any evaluation date.
pub fn parse_date_text(text: &str) -> Result<NaiveDate, DateError> {
    let caps = DATE_PATTERN
        .captures(text)
        .ok_or(DateError::InvalidFormat)?;

    // The pattern guarantees ASCII digits of bounded width.
    let day: u32 = caps[1].parse().map_err(|_| DateError::InvalidFormat)?;
    let month: u32 = caps[2].parse().map_err(|_| DateError::InvalidFormat)?;
    let year: i32 = caps[3].parse().map_err(|_| DateError::InvalidFormat)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::InvalidDate)
}

/// Validates a loan start date against the evaluation date.
///
/// Returns `Ok(None)` for empty input, which means there is nothing to compute
/// yet rather than an error.
pub fn parse_start_date(text: &str, today: NaiveDate) -> Result<Option<NaiveDate>, DateError> {
    if text.is_empty() {
        return Ok(None);
    }

    let start = parse_date_text(text).inspect_err(|e| {
        debug!("Rejected start date {text:?}: {e}");
    })?;

    if start > today {
        debug!("Rejected start date {start}: later than {today}");
        return Err(DateError::FutureDate);
    }
    Ok(Some(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_date() {
        let today = date(2024, 6, 15);
        assert_eq!(
            parse_start_date("01/03/2024", today),
            Ok(Some(date(2024, 3, 1)))
        );
        assert_eq!(parse_start_date("15/06/2024", today), Ok(Some(today)));
    }

    #[test]
    fn test_empty_is_neutral() {
        assert_eq!(parse_start_date("", date(2024, 6, 15)), Ok(None));
    }

    #[test]
    fn test_format_errors() {
        let today = date(2024, 6, 15);
        let malformed = [
            "1/03/2024",
            "01/3/2024",
            "01/03/24",
            "01-03-2024",
            "2024/03/01",
            "00/03/2024",
            "32/03/2024",
            "01/00/2024",
            "01/13/2024",
            " 01/03/2024",
            "01/03/2024 ",
            "01/03/20245",
            "ab/cd/efgh",
            "01/03/٢٠٢٤",
        ];
        for text in malformed {
            assert_eq!(
                parse_start_date(text, today),
                Err(DateError::InvalidFormat),
                "{text:?} should be a format error"
            );
        }
    }

    #[test]
    fn test_calendar_errors() {
        let today = date(2024, 6, 15);
        for text in ["31/02/2024", "30/02/2024", "29/02/2023", "31/04/2024"] {
            assert_eq!(
                parse_start_date(text, today),
                Err(DateError::InvalidDate),
                "{text:?} should be a calendar error"
            );
        }
        assert_eq!(
            parse_start_date("29/02/2024", today),
            Ok(Some(date(2024, 2, 29)))
        );
    }

    #[test]
    fn test_future_date() {
        let today = date(2024, 6, 15);
        assert_eq!(
            parse_start_date("16/06/2024", today),
            Err(DateError::FutureDate)
        );
        assert_eq!(
            parse_start_date("01/01/2030", today),
            Err(DateError::FutureDate)
        );
    }

    #[test]
    fn test_format_is_checked_before_calendar() {
        // Out-of-pattern day wins over the impossible calendar date.
        assert_eq!(parse_date_text("32/02/2024"), Err(DateError::InvalidFormat));
        assert_eq!(parse_date_text("31/02/2024"), Err(DateError::InvalidDate));
    }
}
