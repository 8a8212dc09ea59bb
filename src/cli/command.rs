//! Command-line interface definitions.
//!
//! Defines the CLI structure for the tallyman application using `clap`.
//! The CLI supports subcommands for running the full report pipeline,
//! reseeding the ledger, printing the summary table, and rendering the
//! revenue chart on its own.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use super::paths;

/// Sales ledger seeding and revenue reporting CLI
#[derive(Parser, Debug)]
#[command(name = "tallyman")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the tallyman CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reseed the ledger, print the summary, and render the chart
    Run(RunArgs),

    /// Reset the ledger to the fixed sample lots
    Seed(SeedArgs),

    /// Print the per-product summary table
    Summary(SummaryArgs),

    /// Render the revenue chart from the current ledger
    Chart(ChartArgs),
}

impl Commands {
    /// Configuration file path for this invocation.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        match self {
            Commands::Run(args) => &args.config,
            Commands::Seed(args) => &args.config,
            Commands::Summary(args) => &args.config,
            Commands::Chart(args) => &args.config,
        }
    }
}

/// Arguments for the `run` subcommand.
///
/// Runs the full pipeline: reseed, summarize, print, chart. Optional
/// fields override the corresponding configuration file values.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override the ledger database path.
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Override the chart output path.
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Skip opening the rendered chart in a viewer.
    #[arg(long)]
    pub no_open: bool,
}

/// Arguments for the `seed` subcommand.
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override the ledger database path.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Arguments for the `summary` subcommand.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override the ledger database path.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Arguments for the `chart` subcommand.
#[derive(Parser, Debug)]
pub struct ChartArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override the ledger database path.
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Override the chart output path.
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Skip opening the rendered chart in a viewer.
    #[arg(long)]
    pub no_open: bool,
}
