//! Annuity command implementation.
//!
//! Rates on the command line are percentages; the library works in
//! fractions.

use anyhow::Result;
use clap::{Args, Subcommand};

use tvm_annuities::{nominal_to_ear, Annuities, PaymentTiming, RateBracket};
use tvm_core::CompoundingBasis;

use crate::commands::{ensure_defined, Context, TermArgs};
use crate::error::CliError;
use crate::output::{print_metrics, Metric};

/// Arguments for the annuity command.
#[derive(Args, Debug)]
pub struct AnnuityArgs {
    #[command(subcommand)]
    pub command: AnnuityCommand,
}

/// Annuity subcommands.
#[derive(Subcommand, Debug)]
pub enum AnnuityCommand {
    /// Present value of a payment stream or of a future lump sum
    Pv(PvArgs),

    /// Future value of a payment stream or of a present lump sum
    Fv(FvArgs),

    /// Level payment that amortises a present value or builds a future value
    Payment(PaymentArgs),

    /// Implied rate of a payment stream or of a lump sum
    Rate(RateArgs),

    /// Present value of a perpetual, optionally growing, payment
    Perpetuity(PerpetuityArgs),
}

/// Rate, compounding, term and timing of a schedule.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Nominal annual rate (as percentage)
    #[arg(long)]
    pub rate: f64,

    /// Compounding code: a, s, q, m, w, d, c
    #[arg(long, default_value_t = 'a')]
    pub compounding: char,

    #[command(flatten)]
    pub term: TermArgs,

    /// Payments at the start of each period (annuity due)
    #[arg(long)]
    pub due: bool,
}

impl ScheduleArgs {
    fn timing(&self) -> PaymentTiming {
        if self.due {
            PaymentTiming::Due
        } else {
            PaymentTiming::Ordinary
        }
    }
}

/// Arguments for present value.
#[derive(Args, Debug)]
pub struct PvArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    #[command(flatten)]
    pub source: PvSource,
}

/// What is being discounted.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PvSource {
    /// Periodic payment
    #[arg(long)]
    pub payment: Option<f64>,

    /// Lump sum at the end of the term
    #[arg(long)]
    pub future_value: Option<f64>,
}

/// Arguments for future value.
#[derive(Args, Debug)]
pub struct FvArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    #[command(flatten)]
    pub source: FvSource,
}

/// What is being compounded.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct FvSource {
    /// Periodic payment
    #[arg(long)]
    pub payment: Option<f64>,

    /// Lump sum today
    #[arg(long)]
    pub present_value: Option<f64>,
}

/// Arguments for the level payment.
#[derive(Args, Debug)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    #[command(flatten)]
    pub target: PaymentTarget,
}

/// Value the payments must match.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PaymentTarget {
    /// Amount borrowed today
    #[arg(long)]
    pub present_value: Option<f64>,

    /// Amount to accumulate
    #[arg(long)]
    pub future_value: Option<f64>,
}

/// Arguments for the implied rate.
#[derive(Args, Debug)]
pub struct RateArgs {
    /// Periodic payment; omit to solve a lump sum
    #[arg(long)]
    pub payment: Option<f64>,

    /// Value today
    #[arg(long)]
    pub present_value: Option<f64>,

    /// Value at the end of the term
    #[arg(long)]
    pub future_value: Option<f64>,

    /// Compounding code: a, s, q, m, w, d
    #[arg(long, default_value_t = 'a')]
    pub compounding: char,

    #[command(flatten)]
    pub term: TermArgs,

    /// Lower bound of the search (annual percentage)
    #[arg(long)]
    pub lower: Option<f64>,

    /// Upper bound of the search (annual percentage)
    #[arg(long)]
    pub upper: Option<f64>,
}

/// Arguments for perpetuities.
#[derive(Args, Debug)]
pub struct PerpetuityArgs {
    /// Periodic payment
    #[arg(long)]
    pub payment: f64,

    /// Effective annual discount rate (as percentage)
    #[arg(long)]
    pub rate: f64,

    /// Effective annual growth of the payment (as percentage)
    #[arg(long)]
    pub growth: Option<f64>,

    /// Payment frequency code: a, s, q, m, w, d
    #[arg(long, default_value_t = 'a')]
    pub compounding: char,
}

/// Execute the annuity command.
pub fn execute(args: AnnuityArgs, ctx: &Context) -> Result<()> {
    let annuities = ctx.config.annuities()?;

    match args.command {
        AnnuityCommand::Pv(args) => pv(&annuities, &args, ctx),
        AnnuityCommand::Fv(args) => fv(&annuities, &args, ctx),
        AnnuityCommand::Payment(args) => payment(&annuities, &args, ctx),
        AnnuityCommand::Rate(args) => rate(&annuities, &args, ctx),
        AnnuityCommand::Perpetuity(args) => perpetuity(&annuities, &args, ctx),
    }
}

fn pv(a: &Annuities, args: &PvArgs, ctx: &Context) -> Result<()> {
    let s = &args.schedule;
    let basis = ctx.basis(s.compounding)?;
    let unit = ctx.unit(s.term.unit)?;
    let rate = s.rate / 100.0;

    let value = match (args.source.payment, args.source.future_value) {
        (Some(pmt), _) => a.present_value_of_payments(pmt, rate, basis, s.term.term, unit, s.timing()),
        (None, Some(fv)) => a.present_value(fv, rate, basis, s.term.term, unit),
        (None, None) => return Err(missing("--payment or --future-value")),
    };
    let value = ensure_defined("Present value", value, basis)?;

    print_metrics("Present Value", &[Metric::money("Present Value", value)], ctx.format, ctx.quiet)
}

fn fv(a: &Annuities, args: &FvArgs, ctx: &Context) -> Result<()> {
    let s = &args.schedule;
    let basis = ctx.basis(s.compounding)?;
    let unit = ctx.unit(s.term.unit)?;
    let rate = s.rate / 100.0;

    let value = match (args.source.payment, args.source.present_value) {
        (Some(pmt), _) => a.future_value_of_payments(pmt, rate, basis, s.term.term, unit, s.timing()),
        (None, Some(pv)) => a.future_value(pv, rate, basis, s.term.term, unit),
        (None, None) => return Err(missing("--payment or --present-value")),
    };
    let value = ensure_defined("Future value", value, basis)?;

    print_metrics("Future Value", &[Metric::money("Future Value", value)], ctx.format, ctx.quiet)
}

fn payment(a: &Annuities, args: &PaymentArgs, ctx: &Context) -> Result<()> {
    let s = &args.schedule;
    let basis = ctx.basis(s.compounding)?;
    let unit = ctx.unit(s.term.unit)?;
    let rate = s.rate / 100.0;

    let value = match (args.target.present_value, args.target.future_value) {
        (Some(pv), _) => a.payment_from_pv(pv, rate, basis, s.term.term, unit, s.timing()),
        (None, Some(fv)) => a.payment_from_fv(fv, rate, basis, s.term.term, unit, s.timing()),
        (None, None) => return Err(missing("--present-value or --future-value")),
    };
    let value = ensure_defined("Payment", value, basis)?;
    let count = a.periods().periods(s.term.term, unit, basis);

    let metrics = [
        Metric::money("Payment", value),
        Metric::new("Payments", count),
        Metric::money("Total Paid", value * count),
    ];
    print_metrics("Level Payment", &metrics, ctx.format, ctx.quiet)
}

fn rate(a: &Annuities, args: &RateArgs, ctx: &Context) -> Result<()> {
    let basis = ctx.basis(args.compounding)?;
    let unit = ctx.unit(args.term.unit)?;
    let n = args.term.term;

    let default = ctx.config.rate_solver.bracket();
    let bracket = RateBracket::new(
        args.lower.unwrap_or(default.lower_pct),
        args.upper.unwrap_or(default.upper_pct),
    );

    let nominal = match (args.payment, args.present_value, args.future_value) {
        (Some(pmt), Some(pv), None) => {
            let i = a.implied_rate_from_pv(pv, pmt, basis, n, unit, bracket)?;
            i * f64::from(basis.periods_per_year())
        }
        (Some(pmt), None, Some(fv)) => {
            let i = a.implied_rate_from_fv(fv, pmt, basis, n, unit, bracket)?;
            i * f64::from(basis.periods_per_year())
        }
        (None, Some(pv), Some(fv)) => a.rate_from_pv_fv(pv, fv, basis, n, unit),
        _ => {
            return Err(missing(
                "--payment with one of --present-value or --future-value, \
                 or both values without --payment",
            ))
        }
    };
    let nominal = ensure_defined("Rate", nominal, basis)?;
    tracing::debug!(nominal, %basis, "implied rate");

    let mut metrics = Vec::with_capacity(3);
    if !basis.is_continuous() {
        let periodic = nominal / f64::from(basis.periods_per_year());
        metrics.push(Metric::new("Periodic Rate (%)", periodic * 100.0));
    }
    metrics.push(Metric::new("Nominal Annual Rate (%)", nominal * 100.0));
    metrics.push(Metric::new(
        "Effective Annual Rate (%)",
        nominal_to_ear(nominal, basis) * 100.0,
    ));
    print_metrics("Implied Rate", &metrics, ctx.format, ctx.quiet)
}

fn perpetuity(a: &Annuities, args: &PerpetuityArgs, ctx: &Context) -> Result<()> {
    let basis: CompoundingBasis = ctx.basis(args.compounding)?;
    let discount = args.rate / 100.0;

    let value = match args.growth {
        Some(growth) => {
            let value = a.growing_perpetuity(args.payment, discount, growth / 100.0, basis);
            if value.is_nan() && !basis.is_continuous() {
                return Err(CliError::Undefined {
                    metric: "Growing perpetuity".to_string(),
                    hint: ": the discount rate must exceed the growth rate".to_string(),
                }
                .into());
            }
            value
        }
        None => a.perpetuity(args.payment, discount, basis),
    };
    let value = ensure_defined("Perpetuity", value, basis)?;

    print_metrics("Perpetuity", &[Metric::money("Present Value", value)], ctx.format, ctx.quiet)
}

fn missing(what: &str) -> anyhow::Error {
    CliError::MissingArgument(what.to_string()).into()
}
