//! Bond command implementation.
//!
//! Cash flows, price from yield, yields from price, and duration and
//! convexity at the yield implied by a market price.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use tvm_bonds::{BondCalculator, BondTerms};

use crate::commands::{ensure_defined, validate_positive, Context, TermArgs};
use crate::output::{display_money, print_metrics, print_output, print_section, Metric};

/// Arguments for the bond command.
#[derive(Args, Debug)]
pub struct BondArgs {
    #[command(subcommand)]
    pub command: BondCommand,
}

/// Bond subcommands.
#[derive(Subcommand, Debug)]
pub enum BondCommand {
    /// Show the payment in every period
    CashFlow(BondTermArgs),

    /// Price the bond at an annual yield
    Price(PriceArgs),

    /// Yield to maturity from a market price
    Ytm(MarketArgs),

    /// Yield to call from a market price and call price
    Ytc(CallArgs),

    /// Macaulay and modified duration at the market yield
    Duration(MarketArgs),

    /// Convexity at the market yield
    Convexity(MarketArgs),
}

/// Contract terms of a level-coupon bond.
#[derive(Args, Debug)]
pub struct BondTermArgs {
    /// Face value
    #[arg(long, default_value_t = 1000.0)]
    pub face: f64,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(long)]
    pub coupon: f64,

    /// Compounding code: a, s, q, m, w, d, c
    #[arg(long, default_value_t = 's')]
    pub compounding: char,

    #[command(flatten)]
    pub term: TermArgs,
}

impl BondTermArgs {
    fn terms(&self, ctx: &Context) -> Result<BondTerms> {
        Ok(BondTerms::new(
            self.face,
            self.coupon,
            ctx.basis(self.compounding)?,
            self.term.term,
            ctx.unit(self.term.unit)?,
        ))
    }
}

/// Arguments for pricing from a yield.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondTermArgs,

    /// Annual yield (as percentage)
    #[arg(long = "yield")]
    pub yield_pct: f64,
}

/// Arguments for analytics from a market price.
#[derive(Args, Debug)]
pub struct MarketArgs {
    #[command(flatten)]
    pub bond: BondTermArgs,

    /// Market price
    #[arg(long)]
    pub price: f64,
}

/// Arguments for yield to call.
#[derive(Args, Debug)]
pub struct CallArgs {
    #[command(flatten)]
    pub bond: BondTermArgs,

    /// Market price
    #[arg(long)]
    pub price: f64,

    /// Price paid on call
    #[arg(long)]
    pub call_price: f64,

    /// Time until the call date, counted in --unit
    #[arg(long)]
    pub call_term: f64,
}

/// One row of a cash flow listing.
#[derive(Debug, Serialize, Tabled)]
pub struct CashFlowRow {
    #[tabled(rename = "Period")]
    pub period: usize,
    #[tabled(rename = "Payment", display_with = "display_money")]
    pub payment: f64,
}

/// Execute the bond command.
pub fn execute(args: BondArgs, ctx: &Context) -> Result<()> {
    let calc = ctx.config.bond_calculator()?;

    match args.command {
        BondCommand::CashFlow(bond) => cash_flow(&calc, &bond, ctx),
        BondCommand::Price(args) => price(&calc, &args, ctx),
        BondCommand::Ytm(args) => ytm(&calc, &args, ctx),
        BondCommand::Ytc(args) => ytc(&calc, &args, ctx),
        BondCommand::Duration(args) => duration(&calc, &args, ctx),
        BondCommand::Convexity(args) => convexity(&calc, &args, ctx),
    }
}

fn cash_flow(calc: &BondCalculator, bond: &BondTermArgs, ctx: &Context) -> Result<()> {
    let terms = bond.terms(ctx)?;
    let cf = calc.cash_flow(&terms)?;
    tracing::debug!(periods = cf.len(), basis = %terms.compounding, "bond cash flow");

    let rows: Vec<CashFlowRow> = cf
        .amounts()
        .iter()
        .enumerate()
        .map(|(i, &payment)| CashFlowRow {
            period: i + 1,
            payment,
        })
        .collect();

    print_section(
        &format!("Cash Flow: {} {}", rows.len(), terms.compounding.period_label()),
        ctx.format,
        ctx.quiet,
    );
    print_output(&rows, ctx.format)
}

fn price(calc: &BondCalculator, args: &PriceArgs, ctx: &Context) -> Result<()> {
    let terms = args.bond.terms(ctx)?;
    let price = calc.price(&terms, args.yield_pct)?;
    let price = ensure_defined("Price", price, terms.compounding)?;

    let metrics = [
        Metric::new("Price", price),
        Metric::new("Yield (%)", args.yield_pct),
        Metric::new(
            "Current Yield (%)",
            tvm_bonds::current_yield(terms.coupon_rate_pct, terms.face_value, price) * 100.0,
        ),
    ];
    print_metrics("Bond Price", &metrics, ctx.format, ctx.quiet)
}

fn ytm(calc: &BondCalculator, args: &MarketArgs, ctx: &Context) -> Result<()> {
    let terms = args.bond.terms(ctx)?;
    let price = validate_positive("price", args.price)?;
    let ytm = calc.yield_to_maturity(&terms, price)?;
    let ytm = ensure_defined("Yield to maturity", ytm, terms.compounding)?;

    let metrics = [
        Metric::new("Yield to Maturity (%)", ytm),
        Metric::new(
            "Current Yield (%)",
            tvm_bonds::current_yield(terms.coupon_rate_pct, terms.face_value, price) * 100.0,
        ),
    ];
    print_metrics("Yield to Maturity", &metrics, ctx.format, ctx.quiet)
}

fn ytc(calc: &BondCalculator, args: &CallArgs, ctx: &Context) -> Result<()> {
    let terms = args.bond.terms(ctx)?;
    let price = validate_positive("price", args.price)?;
    let call_price = validate_positive("call price", args.call_price)?;
    let ytc = calc.yield_to_call(&terms, args.call_term, price, call_price)?;
    let ytc = ensure_defined("Yield to call", ytc, terms.compounding)?;

    let metrics = [Metric::new("Yield to Call (%)", ytc)];
    print_metrics("Yield to Call", &metrics, ctx.format, ctx.quiet)
}

fn duration(calc: &BondCalculator, args: &MarketArgs, ctx: &Context) -> Result<()> {
    let terms = args.bond.terms(ctx)?;
    let price = validate_positive("price", args.price)?;
    let analytics = calc.analyze(&terms, price)?;
    ensure_defined("Yield to maturity", analytics.ytm_pct, terms.compounding)?;

    let metrics = [
        Metric::new("Macaulay Duration (years)", analytics.macaulay_duration),
        Metric::new("Modified Duration (years)", analytics.modified_duration),
        Metric::new("Yield to Maturity (%)", analytics.ytm_pct),
    ];
    print_metrics("Duration", &metrics, ctx.format, ctx.quiet)
}

fn convexity(calc: &BondCalculator, args: &MarketArgs, ctx: &Context) -> Result<()> {
    let terms = args.bond.terms(ctx)?;
    let price = validate_positive("price", args.price)?;
    let analytics = calc.analyze(&terms, price)?;
    ensure_defined("Yield to maturity", analytics.ytm_pct, terms.compounding)?;

    let metrics = [
        Metric::new("Convexity (years²)", analytics.convexity),
        Metric::new("Yield to Maturity (%)", analytics.ytm_pct),
    ];
    print_metrics("Convexity", &metrics, ctx.format, ctx.quiet)
}
