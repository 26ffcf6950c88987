//! Pure pawn-loan interest engine

pub mod calculator;
pub mod config;
pub mod date;
pub mod elapsed;
pub mod format;
pub mod interest;
pub mod log;
pub mod messages;
pub mod rates;

// Re-export main types for cleaner imports
pub use calculator::{DateState, Evaluation, EvaluationOptions, LoanInput, evaluate, evaluate_with};
pub use elapsed::{DayCount, ElapsedTime};
pub use interest::InterestResult;
pub use rates::AssetCategory;
