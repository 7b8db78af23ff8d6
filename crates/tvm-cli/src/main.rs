//! TVM CLI - Command-line interface for time-value-of-money analytics.
//!
//! # Usage
//!
//! ```bash
//! # Price a 10% semi-annual 10-year bond at an 11% yield
//! tvm bond price --coupon 10 --term 10 --yield 11
//!
//! # Yield to maturity from a market price
//! tvm bond ytm --coupon 10 --compounding a --term 10 --price 920
//!
//! # Implied monthly rate of a car loan
//! tvm annuity rate --payment 500 --present-value 24000 --compounding m --term 60 --unit m
//!
//! # Mortgage payment and amortization table
//! tvm mortgage --principal 300000 --rate 3.375 --term 30 --schedule
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tvm_config::EngineConfig;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    tracing::debug!(?config, "engine configuration");

    let ctx = Context {
        config,
        format: cli.format,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Bond(args) => commands::bond::execute(args, &ctx)?,
        Commands::Annuity(args) => commands::annuity::execute(args, &ctx)?,
        Commands::SimpleInterest(args) => commands::simple_interest::execute(args, &ctx)?,
        Commands::Mortgage(args) => commands::mortgage::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so that stdout carries only results.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
