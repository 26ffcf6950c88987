pub mod cli;
pub mod core;

use crate::core::calculator::{EvaluationOptions, LoanInput};
use crate::core::config::AppConfig;
use crate::core::date;
use crate::core::elapsed::DayCount;
use crate::core::messages::Language;
use crate::core::rates::AssetCategory;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Inputs for a single quote, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Collateral; falls back to the configured default
    pub asset: Option<AssetCategory>,
    pub principal: String,
    pub date: String,
    /// Evaluation date as DD/MM/YYYY; today when absent
    pub as_of: Option<String>,
    pub day_count: Option<DayCount>,
    pub language: Option<Language>,
    pub json: bool,
}

pub enum AppCommand {
    Quote(QuoteArgs),
    Rates,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("pawnrate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Quote(args) => {
            // Captured once so validation and day counting agree.
            let today = evaluation_date(args.as_of.as_deref())?;
            let json = args.json;
            let (input, options) = resolve_quote(args, &config)?;
            cli::quote::run(&input, today, &options, &config.currency, json)
        }
        AppCommand::Rates => cli::rates::run(),
    }
}

/// Merges command line values over the configuration. Command line wins.
///
/// Fails when the collateral has no rate schedule, so a quote can never
/// silently charge zero interest.
pub fn resolve_quote(args: QuoteArgs, config: &AppConfig) -> Result<(LoanInput, EvaluationOptions)> {
    let asset_category = args.asset.unwrap_or(config.default_asset);
    if asset_category == AssetCategory::Other {
        anyhow::bail!("Unsupported asset category, expected motorbike or vehicle-title");
    }
    let input = LoanInput {
        asset_category,
        principal_text: args.principal,
        start_date_text: args.date,
    };
    let options = EvaluationOptions {
        day_count: args.day_count.unwrap_or(config.day_count),
        language: args.language.unwrap_or(config.language),
    };
    debug!("Resolved quote {input:?} with {options:?}");
    Ok((input, options))
}

fn evaluation_date(as_of: Option<&str>) -> Result<NaiveDate> {
    match as_of {
        Some(text) => date::parse_date_text(text)
            .with_context(|| format!("Invalid evaluation date {text:?}, expected DD/MM/YYYY")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
