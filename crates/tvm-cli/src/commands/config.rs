//! Config command implementation.
//!
//! Shows the effective engine configuration and writes a starting file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use tvm_config::EngineConfig;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output, print_success, print_warning, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write the default configuration to a file
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Destination file
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(&ctx.config, ctx),
        ConfigCommand::Init(args) => init(&args, ctx),
    }
}

fn show(config: &EngineConfig, ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
            Ok(())
        }
        OutputFormat::Minimal => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let ys = &config.yield_solver;
            let rs = &config.rate_solver;
            let rows = vec![
                KeyValue::new("yield_solver.tolerance", ys.tolerance.to_string()),
                KeyValue::new("yield_solver.max_iterations", ys.max_iterations.to_string()),
                KeyValue::new("yield_solver.max_expansions", ys.max_expansions.to_string()),
                KeyValue::new("rate_solver.tolerance", rs.tolerance.to_string()),
                KeyValue::new("rate_solver.max_iterations", rs.max_iterations.to_string()),
                KeyValue::new("rate_solver.lower_pct", rs.lower_pct.to_string()),
                KeyValue::new("rate_solver.upper_pct", rs.upper_pct.to_string()),
                KeyValue::new("periods.daily_basis", config.periods.daily_basis.to_string()),
            ];
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Engine Configuration");
            }
            print_output(&rows, ctx.format)
        }
    }
}

fn init(args: &InitArgs, ctx: &Context) -> Result<()> {
    if args.path.exists() {
        if !args.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite",
                args.path.display()
            );
        }
        if !ctx.quiet {
            print_warning(&format!("Overwriting {}", args.path.display()));
        }
    }

    EngineConfig::default().write_to_file(&args.path)?;
    tracing::info!(path = %args.path.display(), "wrote default configuration");
    if !ctx.quiet {
        print_success(&format!("Wrote {}", args.path.display()));
    }
    Ok(())
}
