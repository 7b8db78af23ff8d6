//! Workflows that cross crate boundaries through the facade.

use approx::assert_relative_eq;
use tvm::prelude::*;

#[test]
fn configured_engine_prices_and_solves() {
    let config = EngineConfig::from_toml_str("[periods]\ndaily_basis = 360").unwrap();
    let bonds = config.bond_calculator().unwrap();

    let terms = BondTerms::from_codes(1000.0, 10.0, 'a', 10.0, 'y', DayBasis::Days360).unwrap();
    let price = bonds.price(&terms, 11.0).unwrap();
    let ytm = bonds.yield_to_maturity(&terms, price).unwrap();
    assert_relative_eq!(ytm, 11.0, epsilon = 1e-3);
}

#[test]
fn implied_rate_matches_effective_rate_conversion() {
    let annuities = EngineConfig::default().annuities().unwrap();
    let pv = annuities.present_value_of_payments(
        250.0,
        0.08,
        CompoundingBasis::Monthly,
        4.0,
        TimeUnit::Years,
        PaymentTiming::Ordinary,
    );
    let periodic = annuities
        .implied_rate_from_pv(
            pv,
            250.0,
            CompoundingBasis::Monthly,
            4.0,
            TimeUnit::Years,
            RateBracket::default(),
        )
        .unwrap();
    assert_relative_eq!(periodic * 12.0, 0.08, epsilon = 1e-7);

    let ear = nominal_to_ear(periodic * 12.0, CompoundingBasis::Monthly);
    assert_relative_eq!(ear_to_nominal(ear, CompoundingBasis::Monthly), 0.08, epsilon = 1e-7);
}

#[test]
fn module_aliases_reach_component_crates() {
    let periods = tvm::periods::PeriodConverter::default();
    assert_eq!(
        periods.periods(2.0, tvm::periods::TimeUnit::Years, tvm::periods::CompoundingBasis::Quarterly),
        8.0
    );
    assert_eq!(tvm::math::solvers::DEFAULT_MAX_ITERATIONS, 100);
}
