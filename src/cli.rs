use clap::{Parser, Subcommand};

/// Jantari Shamsi calendar conversion tool.
#[derive(Parser)]
#[command(
    name = "jantari",
    version,
    about = "Convert between Gregorian and Solar Hijri (Shamsi) dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to a Shamsi date.
    ToShamsi(ToShamsiArgs),
    /// Convert a Shamsi date to a Gregorian date.
    ToGregorian(ToGregorianArgs),
    /// Print the Gregorian date range of a Shamsi month or year.
    Range(RangeArgs),
    /// Print today's Shamsi date and the current month's range.
    Today(TodayArgs),
}

/// Arguments for the `to-shamsi` subcommand.
#[derive(clap::Args)]
pub struct ToShamsiArgs {
    /// Gregorian date in YYYY-MM-DD form.
    pub date: String,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `to-gregorian` subcommand.
#[derive(clap::Args)]
pub struct ToGregorianArgs {
    /// Shamsi year.
    pub year: i32,

    /// Shamsi month (1..=12).
    pub month: u8,

    /// Shamsi day.
    pub day: u8,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Shamsi year.
    pub year: i32,

    /// Shamsi month (1..=12); 0 or omitted selects the whole year.
    #[arg(short, long, default_value_t = 0)]
    pub month: u8,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
