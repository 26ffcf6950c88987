//! Composes month and leftover-day interest into a repayment figure.
use crate::core::elapsed::ElapsedTime;
use crate::core::rates::{self, AssetCategory};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

/// Interest owed on one loan, with every amount rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestResult {
    pub asset_category: AssetCategory,
    pub monthly_rate_percent: Decimal,
    pub month_interest_amount: u64,
    pub leftover_rate_percent: Decimal,
    pub leftover_interest_amount: u64,
    pub total_interest_amount: u64,
    pub total_payment: u64,
}

/// Computes interest for `principal` held over `elapsed`.
///
/// All arithmetic is exact; each amount is rounded half-up from its own
/// full-precision value. The total is rounded from the unrounded sum, so it can
/// differ from the sum of the two rounded components by one unit.
///
/// Returns `None` when there is no principal or no charged day.
pub fn compose(
    category: AssetCategory,
    principal: u64,
    elapsed: &ElapsedTime,
) -> Option<InterestResult> {
    if principal == 0 || elapsed.is_zero() {
        return None;
    }

    let monthly_rate = rates::resolve_monthly_rate(category, principal);
    let leftover_rate = rates::resolve_leftover_rate(monthly_rate, elapsed.leftover_days);

    let amount = Decimal::from(principal);
    let month_interest =
        amount * (monthly_rate / Decimal::ONE_HUNDRED) * Decimal::from(elapsed.whole_months);
    let leftover_interest = amount * (leftover_rate / Decimal::ONE_HUNDRED);
    let total_interest = month_interest + leftover_interest;

    debug!(
        "Interest on {principal}: months={month_interest} leftover={leftover_interest} total={total_interest}"
    );

    let total_interest_amount = round_to_unit(total_interest);
    Some(InterestResult {
        asset_category: category,
        monthly_rate_percent: monthly_rate,
        month_interest_amount: round_to_unit(month_interest),
        leftover_rate_percent: leftover_rate,
        leftover_interest_amount: round_to_unit(leftover_interest),
        total_interest_amount,
        total_payment: principal.saturating_add(total_interest_amount),
    })
}

/// Rounds half-up to a whole currency unit, saturating at `u64::MAX`.
fn round_to_unit(amount: Decimal) -> u64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(u64::MAX)
}
