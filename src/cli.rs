use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::WeekStart;

/// Date picker and age calculator.
#[derive(Parser)]
#[command(
    name = "birthday-picker",
    version,
    about = "Calendar date picker and age calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use this date as "today" instead of the local date.
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// First day of the week in calendar grids.
    #[arg(long, global = true, value_enum)]
    pub week_start: Option<WeekStart>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print age and next-birthday countdown for a birth date.
    Age(AgeArgs),
    /// Print a month grid.
    Calendar(CalendarArgs),
    /// Write dark and light SVG cards with the calendar and age.
    Render(RenderArgs),
    /// Drive the picker interactively, one intent per stdin line.
    Picker,
}

/// Arguments for the `age` subcommand.
#[derive(clap::Args)]
pub struct AgeArgs {
    /// Birth date (YYYY-MM-DD). Falls back to `birth_date` from config.
    pub birth_date: Option<NaiveDate>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Year to show. Defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month to show (1-12). Defaults to the current month.
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Date to mark as selected.
    #[arg(short, long)]
    pub select: Option<NaiveDate>,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Birth date (YYYY-MM-DD). Falls back to `birth_date` from config.
    #[arg(short, long)]
    pub birth: Option<NaiveDate>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}
