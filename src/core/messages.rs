//! User-facing text for date validation failures.
use crate::core::date::DateError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
}

/// Fixed message shown next to the date field for each rejection reason.
pub fn date_error_message(error: DateError, language: Language) -> &'static str {
    match (language, error) {
        (Language::Vi, DateError::InvalidFormat) => {
            "Định dạng ngày không hợp lệ. Vui lòng nhập lại (dd/mm/yyyy)."
        }
        (Language::Vi, DateError::InvalidDate) => "Ngày không hợp lệ. Vui lòng nhập lại.",
        (Language::Vi, DateError::FutureDate) => "Ngày vay không được sau ngày hiện tại.",
        (Language::En, DateError::InvalidFormat) => {
            "Invalid date format. Please re-enter (dd/mm/yyyy)."
        }
        (Language::En, DateError::InvalidDate) => "Invalid date. Please re-enter.",
        (Language::En, DateError::FutureDate) => "Loan date cannot be after the current date.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct_per_error() {
        let errors = [
            DateError::InvalidFormat,
            DateError::InvalidDate,
            DateError::FutureDate,
        ];
        for language in [Language::Vi, Language::En] {
            let messages: std::collections::HashSet<_> = errors
                .iter()
                .map(|e| date_error_message(*e, language))
                .collect();
            assert_eq!(messages.len(), 3);
            assert!(messages.iter().all(|m| !m.is_empty()));
        }
    }

    #[test]
    fn test_vietnamese_is_default() {
        assert_eq!(Language::default(), Language::Vi);
        assert_eq!(
            date_error_message(DateError::FutureDate, Language::default()),
            "Ngày vay không được sau ngày hiện tại."
        );
    }
}
