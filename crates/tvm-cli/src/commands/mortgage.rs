//! Mortgage command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tvm_annuities::AmortizationRow;

use crate::cli::OutputFormat;
use crate::commands::{ensure_defined, validate_positive, Context};
use crate::output::{display_money, print_metrics, print_output, print_section, Metric};

/// Arguments for the mortgage command.
#[derive(Args, Debug)]
pub struct MortgageArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: f64,

    /// Nominal annual rate (as percentage)
    #[arg(long)]
    pub rate: f64,

    /// Term length, counted in --unit
    #[arg(long)]
    pub term: f64,

    /// Time unit code: y, s, q, m, w, d
    #[arg(long, default_value_t = 'y')]
    pub unit: char,

    /// Payment frequency code: a, s, q, m, w, d
    #[arg(long, default_value_t = 'm')]
    pub compounding: char,

    /// Print the amortization table
    #[arg(long)]
    pub schedule: bool,
}

/// One row of the printed amortization table.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "#")]
    pub number: usize,
    #[tabled(rename = "Payment", display_with = "display_money")]
    pub payment: f64,
    #[tabled(rename = "Principal", display_with = "display_money")]
    pub principal: f64,
    #[tabled(rename = "Interest", display_with = "display_money")]
    pub interest: f64,
    #[tabled(rename = "Balance", display_with = "display_money")]
    pub balance: f64,
}

impl From<&AmortizationRow> for ScheduleRow {
    fn from(row: &AmortizationRow) -> Self {
        Self {
            number: row.number,
            payment: row.payment,
            principal: row.principal,
            interest: row.interest,
            balance: row.balance,
        }
    }
}

/// Execute the mortgage command.
pub fn execute(args: MortgageArgs, ctx: &Context) -> Result<()> {
    let principal = validate_positive("principal", args.principal)?;
    let basis = ctx.basis(args.compounding)?;
    let unit = ctx.unit(args.unit)?;
    let rate = args.rate / 100.0;
    let mortgage = ctx.config.mortgage()?;

    if !args.schedule {
        let cost = mortgage.cost(principal, rate, basis, args.term, unit);
        ensure_defined("Payment", cost.payment, basis)?;
        let metrics = [
            Metric::money("Payment", cost.payment),
            Metric::money("Total Cost", cost.total_cost),
            Metric::money("Total Interest", cost.total_interest),
        ];
        return print_metrics("Mortgage", &metrics, ctx.format, ctx.quiet);
    }

    let schedule = mortgage.schedule(principal, rate, basis, args.term, unit)?;
    ensure_defined("Payment", schedule.cost.payment, basis)?;
    tracing::debug!(rows = schedule.rows.len(), "amortization table");

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
            Ok(())
        }
        OutputFormat::Minimal => {
            println!("{}", schedule.cost.payment);
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if ctx.format == OutputFormat::Table {
                let metrics = [
                    Metric::money("Payment", schedule.cost.payment),
                    Metric::money("Total Cost", schedule.cost.total_cost),
                    Metric::money("Total Interest", schedule.cost.total_interest),
                ];
                print_metrics("Mortgage", &metrics, ctx.format, ctx.quiet)?;
            }
            print_section("Amortization", ctx.format, ctx.quiet);
            let rows: Vec<ScheduleRow> = schedule.rows.iter().map(ScheduleRow::from).collect();
            print_output(&rows, ctx.format)
        }
    }
}
