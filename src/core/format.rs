//! Display formatting for amounts and rates.
use rust_decimal::{Decimal, RoundingStrategy};

/// Inserts a `,` between every group of three digits.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_amount(n: u64, currency: &str) -> String {
    format!("{} {currency}", format_number(n))
}

/// Rate without trailing zeros, e.g. `4.5%` or `9%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

/// Rate with exactly two decimals, e.g. `1.80%`.
pub fn format_rate_fixed(rate: Decimal) -> String {
    let mut rounded = rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{rounded}%")
}
