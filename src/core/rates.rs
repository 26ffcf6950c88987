//! Tiered rate schedule for pawn loans.
//!
//! Two immutable tables drive every quote: a monthly base rate keyed by asset
//! category and principal, and a multiplier keyed by the number of leftover
//! days past the last whole 30-day period.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

/// Kind of collateral held against the loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    Motorbike,
    VehicleTitle,
    Other,
}

impl From<&str> for AssetCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "motorbike" | "xe máy" | "xe may" => AssetCategory::Motorbike,
            "vehicle-title" | "vehicle_title" | "vehicletitle" | "giấy tờ xe" | "giay to xe" => {
                AssetCategory::VehicleTitle
            }
            _ => AssetCategory::Other,
        }
    }
}

impl AssetCategory {
    /// Label shown to the customer at the counter.
    pub fn display_label(&self) -> &'static str {
        match self {
            AssetCategory::Motorbike => "Xe Máy",
            AssetCategory::VehicleTitle => "Giấy Tờ Xe",
            AssetCategory::Other => "Khác",
        }
    }
}

impl Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// A principal band: loans strictly below `below` get `rate` percent per month.
/// `below == None` is the open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateBand {
    pub below: Option<u64>,
    pub rate: Decimal,
}

/// Inclusive range of leftover days and the multiplier applied to a fifth of
/// the monthly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftoverBand {
    pub from: u32,
    pub to: u32,
    pub multiplier: Decimal,
}

pub const MOTORBIKE_BANDS: [RateBand; 4] = [
    RateBand {
        below: Some(3_000_000),
        rate: Decimal::from_parts(9, 0, 0, false, 0),
    },
    RateBand {
        below: Some(7_000_000),
        rate: Decimal::from_parts(6, 0, 0, false, 0),
    },
    RateBand {
        below: Some(15_000_000),
        rate: Decimal::from_parts(5, 0, 0, false, 0),
    },
    RateBand {
        below: None,
        rate: Decimal::from_parts(45, 0, 0, false, 1),
    },
];

pub const VEHICLE_TITLE_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

pub const LEFTOVER_BANDS: [LeftoverBand; 8] = [
    LeftoverBand {
        from: 1,
        to: 2,
        multiplier: Decimal::from_parts(1, 0, 0, false, 0),
    },
    LeftoverBand {
        from: 3,
        to: 5,
        multiplier: Decimal::from_parts(15, 0, 0, false, 1),
    },
    LeftoverBand {
        from: 6,
        to: 8,
        multiplier: Decimal::from_parts(2, 0, 0, false, 0),
    },
    LeftoverBand {
        from: 9,
        to: 11,
        multiplier: Decimal::from_parts(25, 0, 0, false, 1),
    },
    LeftoverBand {
        from: 12,
        to: 15,
        multiplier: Decimal::from_parts(3, 0, 0, false, 0),
    },
    LeftoverBand {
        from: 16,
        to: 19,
        multiplier: Decimal::from_parts(35, 0, 0, false, 1),
    },
    LeftoverBand {
        from: 20,
        to: 24,
        multiplier: Decimal::from_parts(4, 0, 0, false, 0),
    },
    LeftoverBand {
        from: 25,
        to: 29,
        multiplier: Decimal::from_parts(45, 0, 0, false, 1),
    },
];

/// Divisor turning a monthly rate into the per-band leftover unit.
const LEFTOVER_DIVISOR: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Monthly base rate in percent for the given collateral and principal.
pub fn resolve_monthly_rate(category: AssetCategory, principal: u64) -> Decimal {
    let rate = match category {
        AssetCategory::Motorbike => MOTORBIKE_BANDS
            .iter()
            .find(|band| band.below.is_none_or(|limit| principal < limit))
            .map_or(Decimal::ZERO, |band| band.rate),
        AssetCategory::VehicleTitle => VEHICLE_TITLE_RATE,
        AssetCategory::Other => Decimal::ZERO,
    };
    debug!("Monthly rate for {category:?} with principal {principal}: {rate}%");
    rate
}

/// Multiplier for the leftover-day charge. Zero leftover days, and anything
/// outside the table, carry no charge.
pub fn leftover_multiplier(leftover_days: u32) -> Decimal {
    LEFTOVER_BANDS
        .iter()
        .find(|band| (band.from..=band.to).contains(&leftover_days))
        .map_or(Decimal::ZERO, |band| band.multiplier)
}

/// Leftover-day rate in percent: `(monthly_rate / 5) * multiplier`.
pub fn resolve_leftover_rate(monthly_rate: Decimal, leftover_days: u32) -> Decimal {
    let rate = monthly_rate / LEFTOVER_DIVISOR * leftover_multiplier(leftover_days);
    debug!("Leftover rate for {leftover_days} days at {monthly_rate}% monthly: {rate}%");
    rate
}
