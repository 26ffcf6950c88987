//! The quote pipeline: raw form input in, a fully derived evaluation out.
//!
//! `evaluate` is pure. Callers re-run it whenever an input changes and render
//! whatever comes back; nothing is carried between calls.
use crate::core::date::{self, DateError};
use crate::core::elapsed::{self, DayCount, ElapsedTime};
use crate::core::interest::{self, InterestResult};
use crate::core::messages::{self, Language};
use crate::core::rates::AssetCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Loan details as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    pub asset_category: AssetCategory,
    pub principal_text: String,
    pub start_date_text: String,
}

/// Validity of the start date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateState {
    Empty,
    InvalidFormat,
    InvalidDate,
    FutureDate,
    Valid,
}

impl From<DateError> for DateState {
    fn from(error: DateError) -> Self {
        match error {
            DateError::InvalidFormat => DateState::InvalidFormat,
            DateError::InvalidDate => DateState::InvalidDate,
            DateError::FutureDate => DateState::FutureDate,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    pub day_count: DayCount,
    pub language: Language,
}

/// Everything derived from one input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub evaluation_date: NaiveDate,
    pub principal: u64,
    pub date_state: DateState,
    pub start_date: Option<NaiveDate>,
    pub elapsed: ElapsedTime,
    pub result: Option<InterestResult>,
    /// Empty unless the date was rejected.
    pub date_error_message: String,
}

impl Evaluation {
    /// Whether the loan information block (days, months, leftover) has anything to show.
    pub fn has_elapsed_time(&self) -> bool {
        self.date_state == DateState::Valid && !self.elapsed.is_zero()
    }
}

/// Keeps only the digits of `text`. No digits means zero; overflow saturates.
pub fn parse_principal(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d))
        })
}

/// Evaluates with the default day count and language.
pub fn evaluate(input: &LoanInput, today: NaiveDate) -> Evaluation {
    evaluate_with(input, today, &EvaluationOptions::default())
}

/// Runs validation, decomposition and composition against a single
/// evaluation date.
pub fn evaluate_with(
    input: &LoanInput,
    today: NaiveDate,
    options: &EvaluationOptions,
) -> Evaluation {
    let principal = parse_principal(&input.principal_text);
    let mut evaluation = Evaluation {
        evaluation_date: today,
        principal,
        date_state: DateState::Empty,
        start_date: None,
        elapsed: ElapsedTime::default(),
        result: None,
        date_error_message: String::new(),
    };

    let start = match date::parse_start_date(&input.start_date_text, today) {
        Ok(Some(start)) => start,
        Ok(None) => return evaluation,
        Err(e) => {
            evaluation.date_state = e.into();
            evaluation.date_error_message =
                messages::date_error_message(e, options.language).to_string();
            return evaluation;
        }
    };

    evaluation.date_state = DateState::Valid;
    evaluation.start_date = Some(start);
    evaluation.elapsed = elapsed::decompose(start, today, options.day_count);
    evaluation.result = interest::compose(input.asset_category, principal, &evaluation.elapsed);
    debug!(
        "Evaluated {:?} on {today}: state={:?} result={}",
        input,
        evaluation.date_state,
        evaluation.result.is_some()
    );
    evaluation
}
