use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use codi_cash::config::Config;
use codi_cash::date_utils::{self, parse_date, TimeRangeSelector};
use codi_cash::error::{AppError, AppResult};
use codi_cash::locale::Locale;
use codi_cash::report::{self, ReportStyle};
use codi_cash::services::aggregations;
use codi_cash::services::records::load_records;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(
    name = "codi-cash",
    version,
    about = "Aggregate expense records into dashboard chart data"
)]
struct Cli {
    /// Expense data file (.json or .csv)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Named range: all, last_week, this_month, last_three_months, this_year
    #[arg(short, long, global = true)]
    range: Option<String>,

    /// Custom range start (yyyy-MM-dd), used with --to
    #[arg(long, global = true)]
    from: Option<String>,

    /// Custom range end (yyyy-MM-dd), used with --from
    #[arg(long, global = true)]
    to: Option<String>,

    /// Evaluate ranges as of this date instead of the local clock
    #[arg(long, global = true)]
    today: Option<String>,

    /// Label locale (pt-BR or en-US)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the records inside the range
    Filter,
    /// Monthly totals for the growth chart
    Growth,
    /// Fixed vs. variable totals for the proportion chart
    Categories,
    /// Dashboard summary cards
    Summary,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codi_cash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match run(cli, config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, mut config: Config) -> AppResult<String> {
    if let Some(file) = cli.file {
        config.data_path = file;
    }
    if let Some(locale) = cli.locale.as_deref() {
        config.locale = locale
            .parse::<Locale>()
            .map_err(|_| AppError::Config(format!("Unsupported locale '{}'", locale)))?;
    }

    let today = match cli.today.as_deref() {
        Some(s) => parse_date(s)
            .ok_or_else(|| AppError::Validation(format!("Invalid --today date '{}'", s)))?,
        None => date_utils::today(),
    };

    let selector =
        TimeRangeSelector::from_params(cli.range.as_deref(), cli.from.as_deref(), cli.to.as_deref());
    tracing::debug!(selector = selector.as_str(), %today, "Resolved time range");

    let loaded = load_records(&config.data_path)?;
    for error in &loaded.errors {
        tracing::warn!("{}", error);
    }
    let records = loaded.records;

    let style = ReportStyle {
        locale: config.locale,
        currency: &config.currency,
    };
    let json = cli.format == OutputFormat::Json;

    let output = match cli.command {
        Command::Filter => {
            let filtered = aggregations::filter_by_range(&records, &selector, today);
            if json {
                report::to_json(&filtered)?
            } else {
                report::render_records(&filtered, style)
            }
        }
        Command::Growth => {
            let series = aggregations::growth_series(&records, &selector, today, config.locale);
            if json {
                report::to_json(&series)?
            } else {
                report::render_growth(&series, style)
            }
        }
        Command::Categories => {
            let totals = aggregations::category_totals(&records, &selector, today);
            if json {
                report::to_json(&totals)?
            } else {
                report::render_categories(&totals, style)
            }
        }
        Command::Summary => {
            let summary = aggregations::expense_summary(&records, &selector, today);
            if json {
                report::to_json(&summary)?
            } else {
                report::render_summary(&summary, style)
            }
        }
    };

    Ok(if output.ends_with('\n') {
        output
    } else {
        output + "\n"
    })
}
