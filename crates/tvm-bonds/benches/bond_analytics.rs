//! Benchmarks for bond pricing, yield and risk analytics.
//!
//! Run with: cargo bench -p tvm-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tvm_bonds::prelude::*;
use tvm_core::{CompoundingBasis, TimeUnit};

const BASIS: CompoundingBasis = CompoundingBasis::SemiAnnually;

fn bench_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("price");
    for years in [2.0, 10.0, 30.0] {
        let cf = bond_cash_flow(1000.0, 5.0, BASIS, years, TimeUnit::Years);
        group.bench_with_input(BenchmarkId::from_parameter(years), &cf, |b, cf| {
            b.iter(|| price(cf, black_box(6.25), BASIS));
        });
    }
    group.finish();
}

fn bench_yield_to_maturity(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_to_maturity");
    for years in [2.0, 10.0, 30.0] {
        let cf = bond_cash_flow(1000.0, 5.0, BASIS, years, TimeUnit::Years);
        let target = price(&cf, 6.25, BASIS);
        group.bench_with_input(BenchmarkId::from_parameter(years), &cf, |b, cf| {
            b.iter(|| yield_to_maturity(cf, black_box(target), BASIS));
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let calc = BondCalculator::default();
    let terms = BondTerms::new(1000.0, 5.0, BASIS, 10.0, TimeUnit::Years);
    let target = calc.price(&terms, 6.25).unwrap_or(f64::NAN);

    c.bench_function("analyze_10y", |b| {
        b.iter(|| calc.analyze(black_box(&terms), black_box(target)));
    });
}

criterion_group!(benches, bench_price, bench_yield_to_maturity, bench_analyze);
criterion_main!(benches);
