use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use pawnrate::core::elapsed::DayCount;
use pawnrate::core::log::init_logging;
use pawnrate::core::messages::Language;
use pawnrate::core::rates::AssetCategory;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AssetArg {
    /// Xe Máy
    Motorbike,
    /// Giấy Tờ Xe
    VehicleTitle,
}

impl From<AssetArg> for AssetCategory {
    fn from(arg: AssetArg) -> AssetCategory {
        match arg {
            AssetArg::Motorbike => AssetCategory::Motorbike,
            AssetArg::VehicleTitle => AssetCategory::VehicleTitle,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DayCountArg {
    /// Charge the start day itself
    Inclusive,
    /// Charge only whole elapsed days
    Elapsed,
}

impl From<DayCountArg> for DayCount {
    fn from(arg: DayCountArg) -> DayCount {
        match arg {
            DayCountArg::Inclusive => DayCount::Inclusive,
            DayCountArg::Elapsed => DayCount::Elapsed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    Vi,
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Language {
        match arg {
            LanguageArg::Vi => Language::Vi,
            LanguageArg::En => Language::En,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Compute interest owed on a single loan
    Quote {
        /// Collateral; defaults to the configured asset
        #[arg(short, long, value_enum)]
        asset: Option<AssetArg>,
        /// Loan amount; separators and other non-digits are ignored
        #[arg(short, long)]
        principal: String,
        /// Loan start date as DD/MM/YYYY
        #[arg(short, long)]
        date: String,
        /// Evaluate as of this DD/MM/YYYY date instead of today
        #[arg(long)]
        as_of: Option<String>,
        /// Override the configured day-count convention
        #[arg(long, value_enum)]
        day_count: Option<DayCountArg>,
        /// Override the configured message language
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display the monthly and leftover-day rate schedule
    Rates,
}

impl From<Commands> for pawnrate::AppCommand {
    fn from(cmd: Commands) -> pawnrate::AppCommand {
        match cmd {
            Commands::Quote {
                asset,
                principal,
                date,
                as_of,
                day_count,
                language,
                json,
            } => pawnrate::AppCommand::Quote(pawnrate::QuoteArgs {
                asset: asset.map(Into::into),
                principal,
                date,
                as_of,
                day_count: day_count.map(Into::into),
                language: language.map(Into::into),
                json,
            }),
            Commands::Rates => pawnrate::AppCommand::Rates,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => pawnrate::cli::setup::setup().map(|path| {
            println!("Created default configuration at {}", path.display());
        }),
        Some(cmd) => pawnrate::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
