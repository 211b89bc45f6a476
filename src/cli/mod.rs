//! Command-line front end over JSON transaction exports.

pub mod output;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{ConfigManager, Theme};
use crate::core::calendar::{CalendarMonth, WeekStart};
use crate::core::filter::{CategoryFilter, TransactionFilter};
use crate::core::services::{SummaryService, TransactionService};
use crate::domain::{DateWindow, DATE_KEY_FORMAT};
use crate::errors::LedgerResult;
use crate::storage::{JsonFileSource, TransactionSource};
use crate::utils::build_info;

#[derive(Debug, Parser)]
#[command(name = "family_ledger_cli", version, about = "Family ledger daily totals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print income, expense and balance per day.
    Daily {
        file: PathBuf,
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,
        /// Restrict to a category; repeat for several. Remembered for later runs.
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Forget the remembered category selection.
        #[arg(long, conflicts_with = "categories")]
        all_categories: bool,
    },
    /// Render a month grid with per-day markers.
    Calendar {
        file: PathBuf,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long, value_parser = parse_date)]
        select: Option<NaiveDate>,
        /// Start weeks on Monday instead of Sunday.
        #[arg(long)]
        monday: bool,
    },
    /// Show how every record was classified.
    Explain { file: PathBuf },
    /// Show or change the persisted theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Print build metadata.
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DD, got `{raw}`: {err}"))
}

pub fn run_cli() -> LedgerResult<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> LedgerResult<()> {
    match cli.command {
        Command::Daily {
            file,
            from,
            to,
            categories,
            all_categories,
        } => daily(file, from, to, categories, all_categories),
        Command::Calendar {
            file,
            year,
            month,
            select,
            monday,
        } => calendar(file, year, month, select, monday),
        Command::Explain { file } => explain(file),
        Command::Theme { action } => theme(action),
        Command::Version => {
            version();
            Ok(())
        }
    }
}

fn daily(
    file: PathBuf,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    categories: Vec<String>,
    all_categories: bool,
) -> LedgerResult<()> {
    let transactions = JsonFileSource::new(file).fetch()?;
    let selection = remembered_categories(categories, all_categories)?;
    let mut filter = TransactionFilter::new().with_categories(selection);
    filter.window = match (from, to) {
        (None, None) => None,
        (Some(start), None) => Some(DateWindow::new(start, NaiveDate::MAX)?),
        (None, Some(end)) => Some(DateWindow::new(NaiveDate::MIN, end)?),
        (Some(start), Some(end)) => Some(DateWindow::new(start, end)?),
    };

    let days = SummaryService::filtered_daily_totals(&transactions, &filter);
    output::section("Daily totals");
    if days.is_empty() {
        output::info("No transactions in range.");
        return Ok(());
    }
    for (date, day) in &days {
        println!("{}", output::day_line(date, day));
    }
    let total = SummaryService::period_totals(&days);
    println!("{}", output::day_line("total     ", &total));
    Ok(())
}

/// Flags replace the saved selection; with no flags the saved one applies.
fn remembered_categories(categories: Vec<String>, clear: bool) -> LedgerResult<CategoryFilter> {
    let manager = ConfigManager::from_env()?;
    let mut config = manager.load()?;
    if !clear && categories.is_empty() {
        return Ok(config.category_filter());
    }
    let filter = CategoryFilter::new(categories);
    config.remember_categories(&filter);
    manager.save(&config)?;
    Ok(filter)
}

fn calendar(
    file: PathBuf,
    year: i32,
    month: u32,
    select: Option<NaiveDate>,
    monday: bool,
) -> LedgerResult<()> {
    let transactions = JsonFileSource::new(file).fetch()?;
    let week_start = if monday {
        WeekStart::Monday
    } else {
        WeekStart::Sunday
    };
    let days = SummaryService::daily_totals(&transactions);
    let grid = CalendarMonth::build(year, month, week_start, &days)?;
    print!("{grid}");

    if let Some(date) = select {
        let key = date.format(DATE_KEY_FORMAT).to_string();
        output::section(&key);
        match SummaryService::selected_day(&days, date) {
            Some(day) => println!("{}", output::day_line(&key, &day)),
            None => output::info("Nothing recorded for this day."),
        }
    }
    Ok(())
}

fn explain(file: PathBuf) -> LedgerResult<()> {
    let transactions = JsonFileSource::new(file).fetch()?;
    output::section("Classification");
    for (record, reason) in TransactionService::explain(&transactions) {
        println!("{}", output::explain_line(record, reason));
    }
    Ok(())
}

fn theme(action: ThemeAction) -> LedgerResult<()> {
    let manager = ConfigManager::from_env()?;
    let config = match action {
        ThemeAction::Show => manager.load()?,
        ThemeAction::Toggle => manager.toggle_theme()?,
        ThemeAction::Light => manager.set_theme(Theme::Light)?,
        ThemeAction::Dark => manager.set_theme(Theme::Dark)?,
    };
    println!("theme: {}", config.theme);
    Ok(())
}

fn version() {
    let meta = build_info::current();
    println!("Family Ledger {}", meta.version);
    println!("  commit   {} ({})", meta.git_hash, meta.git_status);
    println!("  built    {} [{} / {}]", meta.timestamp, meta.target, meta.profile);
    println!("  rustc    {}", meta.rustc);
}
