use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// loadcast facility electricity forecaster.
#[derive(Parser)]
#[command(
    name = "loadcast",
    version,
    about = "Forecast facility electricity draw from occupancy with ARIMAX"
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
    /// Write synthetic classroom observations to CSV.
    Generate(GenerateArgs),
    /// Fit the model to observations and forecast the next steps.
    Forecast(ForecastArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output CSV path.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Override number of days from config.
    #[arg(short, long)]
    pub days: Option<usize>,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// First timestamp (RFC 3339 or `YYYY-MM-DD HH:MM:SS`, UTC).
    /// Defaults to the current hour minus `days`.
    #[arg(long)]
    pub start: Option<String>,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input observations CSV (`timestamp,occupancy,electricity_draw`).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Expected occupancy for each forecast step, comma separated.
    /// A single value is repeated over `--horizon`.
    #[arg(long, value_delimiter = ',', required = true)]
    pub occupancy: Vec<f64>,

    /// Number of steps ahead; defaults to the number of occupancy values.
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Interval confidence level in (0, 1); overrides config.
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Model order as `p,d,q`; overrides config.
    #[arg(long)]
    pub order: Option<String>,

    /// Fit only on the most recent N observations.
    #[arg(long)]
    pub window: Option<usize>,

    /// Output JSON path; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
