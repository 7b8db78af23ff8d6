//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnnuityArgs, BondArgs, ConfigArgs, MortgageArgs, SimpleInterestArgs};

/// TVM - Time-value-of-money analytics CLI
#[derive(Parser)]
#[command(name = "tvm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "TVM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log solver progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bond cash flows, prices, yields and risk
    Bond(BondArgs),

    /// Lump sums, annuities, implied rates and perpetuities
    Annuity(AnnuityArgs),

    /// Simple interest on the ordinary, banker's and accurate bases
    SimpleInterest(SimpleInterestArgs),

    /// Mortgage payment, cost and amortization table
    Mortgage(MortgageArgs),

    /// Show or create engine configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
