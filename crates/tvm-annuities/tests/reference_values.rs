//! Reference values and properties for annuity, rate and loan analytics.

use approx::assert_relative_eq;
use proptest::prelude::*;

use tvm_annuities::prelude::*;
use tvm_core::{CompoundingBasis, PeriodConverter, TimeUnit};

const ANNUAL: CompoundingBasis = CompoundingBasis::Annually;
const MONTHLY: CompoundingBasis = CompoundingBasis::Monthly;

// =============================================================================
// Implied rates
// =============================================================================

#[test]
fn car_loan_implied_rate() {
    // 24,000 borrowed against 60 payments of 500
    let i = Annuities::default()
        .implied_rate_from_pv(
            24000.0,
            500.0,
            MONTHLY,
            5.0,
            TimeUnit::Years,
            RateBracket::new(1.0, 31.0),
        )
        .unwrap();
    assert_relative_eq!(i * 100.0, 0.7628634, epsilon = 1e-5);
    assert_relative_eq!(i * 12.0 * 100.0, 9.154323, epsilon = 1e-4);
}

#[test]
fn implied_rate_agrees_with_closed_form_pricing() {
    let a = Annuities::default();
    let pv = a.present_value_of_payments(
        350.0,
        0.072,
        CompoundingBasis::Quarterly,
        8.0,
        TimeUnit::Years,
        PaymentTiming::Ordinary,
    );
    let i = a
        .implied_rate_from_pv(
            pv,
            350.0,
            CompoundingBasis::Quarterly,
            32.0,
            TimeUnit::Quarters,
            RateBracket::default(),
        )
        .unwrap();
    assert_relative_eq!(i, 0.018, epsilon = 1e-8);
}

#[test]
fn narrow_bracket_reports_missing_root() {
    let err = Annuities::default()
        .implied_rate_from_pv(
            24000.0,
            500.0,
            MONTHLY,
            60.0,
            TimeUnit::Months,
            RateBracket::new(20.0, 30.0),
        )
        .unwrap_err();
    assert!(err.is_no_bracket());
    assert!(err.to_string().starts_with("Implied rate"));
}

// =============================================================================
// Rates
// =============================================================================

#[test]
fn rate_conversions() {
    assert_relative_eq!(nominal_to_ear(0.12, MONTHLY) * 100.0, 12.6825030131, epsilon = 1e-9);
    assert_relative_eq!(
        convert_compounding(0.10, ANNUAL, CompoundingBasis::SemiAnnually) * 100.0,
        9.76176963,
        epsilon = 1e-8
    );
    assert_relative_eq!(
        convert_compounding(0.10, ANNUAL, CompoundingBasis::Continuous) * 100.0,
        9.53101798,
        epsilon = 1e-8
    );
    assert_relative_eq!(real_interest_rate(0.045, 0.065) * 100.0, -1.87793427, epsilon = 1e-8);
    assert_relative_eq!(
        average_rate_of_return(&[5.0, -3.0, 12.0, 10.0]) * 100.0,
        5.83831944,
        epsilon = 1e-7
    );
    assert_relative_eq!(growth_decay_periods(2.0, 0.15, ANNUAL), 4.959484454, epsilon = 1e-9);
}

// =============================================================================
// Simple interest
// =============================================================================

#[test]
fn simple_interest_june_to_november() {
    let periods = PeriodConverter::default();
    let interest = |basis| {
        SimpleInterest::new(basis, periods).interest(10000.0, 0.09, ANNUAL, 153.0, TimeUnit::Days365)
    };
    assert_relative_eq!(interest(SimpleInterestBasis::Bankers), 382.50, epsilon = 1e-9);
    assert_relative_eq!(interest(SimpleInterestBasis::Accurate), 377.26027397, epsilon = 1e-8);
    assert_relative_eq!(interest(SimpleInterestBasis::Ordinary), 375.00, epsilon = 1e-9);
}

// =============================================================================
// Mortgages
// =============================================================================

#[test]
fn thirty_year_mortgage() {
    let mortgage = Mortgage::default();
    let cost = mortgage.cost(300_000.0, 0.03375, MONTHLY, 30.0, TimeUnit::Years);
    assert_relative_eq!(cost.payment, 1326.29, epsilon = 0.005);
    assert_relative_eq!(cost.total_interest, 177_463.91, epsilon = 0.005);

    let schedule = mortgage
        .schedule(300_000.0, 0.03375, MONTHLY, 360.0, TimeUnit::Months)
        .unwrap();
    assert_eq!(schedule.cost, cost);
    assert_eq!(schedule.rows.len(), 360);
    assert!(schedule
        .rows
        .windows(2)
        .all(|w| w[1].balance < w[0].balance && w[1].principal > w[0].principal));
}

#[test]
fn schedule_serializes_to_json() {
    let schedule = Mortgage::default()
        .schedule(1200.0, 0.12, MONTHLY, 3.0, TimeUnit::Months)
        .unwrap();
    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["rows"][2]["number"], 3);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn implied_rate_recovers_pricing_rate(rate in 0.02..0.25f64, months in 24u32..360) {
        let a = Annuities::default();
        let n = f64::from(months);
        let pv = a.present_value_of_payments(
            100.0, rate, MONTHLY, n, TimeUnit::Months, PaymentTiming::Ordinary,
        );
        let i = a
            .implied_rate_from_pv(pv, 100.0, MONTHLY, n, TimeUnit::Months, RateBracket::default())
            .unwrap();
        prop_assert!((i * 12.0 - rate).abs() < 1e-7);
    }

    #[test]
    fn amortization_repays_principal(
        principal in 1_000.0..1_000_000.0f64,
        rate in 0.01..0.15f64,
        years in 1u32..40,
    ) {
        let schedule = Mortgage::default()
            .schedule(principal, rate, MONTHLY, f64::from(years), TimeUnit::Years)
            .unwrap();
        let repaid: f64 = schedule.rows.iter().map(|r| r.principal).sum();
        prop_assert!((repaid - principal).abs() < 1e-6 * principal);
    }

    #[test]
    fn due_exceeds_ordinary(rate in 0.001..0.3f64, years in 1u32..30) {
        let a = Annuities::default();
        let n = f64::from(years);
        let ord = a.present_value_of_payments(1.0, rate, ANNUAL, n, TimeUnit::Years, PaymentTiming::Ordinary);
        let due = a.present_value_of_payments(1.0, rate, ANNUAL, n, TimeUnit::Years, PaymentTiming::Due);
        prop_assert!(due > ord);
    }
}
