//! Terminal presentation of quotes and the rate schedule

pub mod quote;
pub mod rates;
pub mod setup;
pub mod ui;
