//! Simple interest command implementation.

use anyhow::Result;
use clap::{Args, ValueEnum};

use tvm_annuities::SimpleInterestBasis;

use crate::commands::{ensure_defined, validate_positive, Context};
use crate::output::{print_metrics, Metric};

/// Arguments for the simple-interest command.
#[derive(Args, Debug)]
pub struct SimpleInterestArgs {
    /// Principal
    #[arg(long)]
    pub principal: f64,

    /// Annual rate (as percentage)
    #[arg(long)]
    pub rate: f64,

    /// Term length, counted in --unit
    #[arg(long)]
    pub term: f64,

    /// Time unit code: y, s, q, m, w, d
    #[arg(long, default_value_t = 'd')]
    pub unit: char,

    /// Compounding code of the quoted rate: a, s, q, m, w, d
    #[arg(long, default_value_t = 'a')]
    pub compounding: char,

    /// Day-count basis; all three when omitted
    #[arg(long, value_enum)]
    pub basis: Option<BasisArg>,
}

/// Day-count basis options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BasisArg {
    /// 30-day months in a 360-day year
    Ordinary,
    /// Exact days in a 360-day year
    Bankers,
    /// Exact days in a 365-day year
    Accurate,
}

impl From<BasisArg> for SimpleInterestBasis {
    fn from(arg: BasisArg) -> Self {
        match arg {
            BasisArg::Ordinary => SimpleInterestBasis::Ordinary,
            BasisArg::Bankers => SimpleInterestBasis::Bankers,
            BasisArg::Accurate => SimpleInterestBasis::Accurate,
        }
    }
}

/// Execute the simple-interest command.
pub fn execute(args: SimpleInterestArgs, ctx: &Context) -> Result<()> {
    let principal = validate_positive("principal", args.principal)?;
    let compounding = ctx.basis(args.compounding)?;
    let unit = ctx.unit(args.unit)?;

    let bases: Vec<SimpleInterestBasis> = match args.basis {
        Some(basis) => vec![basis.into()],
        None => SimpleInterestBasis::ALL.to_vec(),
    };

    let mut metrics = Vec::with_capacity(bases.len());
    for basis in bases {
        let calc = ctx.config.simple_interest(basis)?;
        let interest = calc.interest(principal, args.rate / 100.0, compounding, args.term, unit);
        let interest = ensure_defined("Interest", interest, compounding)?;
        metrics.push(Metric::money(format!("Interest, {basis}"), interest));
    }

    print_metrics("Simple Interest", &metrics, ctx.format, ctx.quiet)
}
