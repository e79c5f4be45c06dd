//! `dates`: resolve relative date expressions from the command line.
//!
//! The anchor date comes from `--today`, then `DATES_TODAY`, then the system
//! clock. Everything after that is delegated to the `date_resolver` library.

mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use date_resolver::{
    month_grid, parse_iso_date, relative, resolve_with_options, weekday_info, AmbiguityPolicy,
    ResolveOptions, WeekStart,
};
use serde::Serialize;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser)]
#[command(name = "dates")]
#[command(version, about = "Resolve relative date expressions like \"next tuesday\" or \"end of month\"")]
struct Cli {
    /// Anchor date used as "today" (defaults to the system date)
    #[arg(long, global = true, env = "DATES_TODAY", value_name = "YYYY-MM-DD")]
    today: Option<String>,

    /// First day of the week for "this <weekday>", week boundaries and calendars
    #[arg(
        long,
        global = true,
        env = "DATES_WEEK_START",
        value_enum,
        default_value_t = WeekStartArg::Sunday
    )]
    week_start: WeekStartArg,

    /// Which occurrence a bare weekday or a month and day without a year refers to
    #[arg(long, global = true, value_enum, default_value_t = PreferArg::Future)]
    prefer: PreferArg,

    /// Output format (json by default; text by default for `calendar`)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Enable verbose logging (use multiple times for more detail)
    ///
    /// -v shows which expression family matched, -vv also shows time-of-day stripping.
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve an expression such as "3 fridays from now" to a date
    Resolve {
        /// The expression; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },
    /// Show the day of the week for a YYYY-MM-DD date
    Weekday { date: String },
    /// Show how far a YYYY-MM-DD date is from today
    Relative { date: String },
    /// Print a month calendar with today highlighted
    Calendar {
        /// Month number 1-12 (defaults to the current month)
        month: Option<u32>,
        /// Four-digit year (defaults to the current year)
        year: Option<i32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum WeekStartArg {
    Sunday,
    Monday,
}

impl From<WeekStartArg> for WeekStart {
    fn from(arg: WeekStartArg) -> Self {
        match arg {
            WeekStartArg::Sunday => WeekStart::Sunday,
            WeekStartArg::Monday => WeekStart::Monday,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PreferArg {
    Future,
    Past,
}

impl From<PreferArg> for AmbiguityPolicy {
    fn from(arg: PreferArg) -> Self {
        match arg {
            PreferArg::Future => AmbiguityPolicy::PreferFuture,
            PreferArg::Past => AmbiguityPolicy::PreferPast,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logging is off unless `-v` is given; `RUST_LOG` can still narrow it.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level == LevelFilter::OFF {
        return;
    }
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let anchor = anchor_date(cli.today.as_deref())?;
    let options = ResolveOptions {
        week_start: cli.week_start.into(),
        ambiguity: cli.prefer.into(),
    };
    tracing::debug!("week_start = {:?}, ambiguity = {:?}", options.week_start, options.ambiguity);

    match &cli.command {
        Command::Resolve { expression } => {
            let expression = expression.join(" ");
            let resolved = resolve_with_options(&expression, anchor, &options)?;
            emit(cli.format, &resolved, render::resolved)
        }
        Command::Weekday { date } => {
            let info = weekday_info(parse_date_arg(date)?);
            emit(cli.format, &info, render::weekday)
        }
        Command::Relative { date } => {
            let info = relative(parse_date_arg(date)?, anchor);
            emit(cli.format, &info, render::relative)
        }
        Command::Calendar { month, year } => {
            let grid = month_grid(*month, *year, anchor, options.week_start)?;
            match cli.format.unwrap_or(OutputFormat::Text) {
                OutputFormat::Text => Ok(render::calendar(&grid)),
                OutputFormat::Json => to_json(&grid),
            }
        }
    }
}

fn anchor_date(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(raw) => {
            let anchor = parse_iso_date(raw).context("invalid --today value")?;
            tracing::debug!("anchor = {} (from --today/DATES_TODAY)", anchor);
            Ok(anchor)
        }
        None => {
            let anchor = chrono::Local::now().date_naive();
            tracing::debug!("anchor = {} (from system clock)", anchor);
            Ok(anchor)
        }
    }
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate> {
    Ok(parse_iso_date(raw)?)
}

fn emit<T: Serialize>(
    format: Option<OutputFormat>,
    value: &T,
    text: fn(&T) -> String,
) -> Result<String> {
    match format.unwrap_or(OutputFormat::Json) {
        OutputFormat::Json => to_json(value),
        OutputFormat::Text => Ok(text(value)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
