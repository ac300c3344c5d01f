//! LoanFee Benchmarks
//!
//! Covers the three resolution paths:
//! - Exact breakpoint match
//! - Lagrange interpolation
//! - Nearest-match fallback on a plateau

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loanfee_engine::interpolation::{round_up_to_nearest_five, LagrangePolynomial};
use loanfee_engine::provider::parse_fee_table;
use loanfee_engine::FeeResolver;
use rust_decimal_macros::dec;

const FEES_JSON: &str = include_str!("../../../data/fees.json");

fn bench_resolution_paths(c: &mut Criterion) {
    let resolver = FeeResolver::with_table(parse_fee_table(FEES_JSON).expect("valid fee table"));
    // Warm the table cache outside the measurement
    resolver.table().expect("table loads");

    let mut group = c.benchmark_group("resolve");
    for (name, term, amount) in [
        ("exact", 12u32, dec!(1000)),
        ("interpolated", 24, dec!(2750)),
        ("fallback", 12, dec!(2501)),
    ] {
        group.bench_with_input(BenchmarkId::new(name, amount), &amount, |b, &amount| {
            b.iter(|| resolver.calculate(black_box(term), black_box(amount)))
        });
    }
    group.finish();
}

fn bench_interpolation(c: &mut Criterion) {
    let table = parse_fee_table(FEES_JSON).expect("valid fee table");
    let schedule = table.schedule(12).expect("12 month schedule");
    let polynomial = LagrangePolynomial::from_schedule(schedule).expect("finite fees");

    c.bench_function("lagrange_evaluate_20_points", |b| {
        b.iter(|| round_up_to_nearest_five(polynomial.evaluate(black_box(4500.0))))
    });
}

criterion_group!(benches, bench_resolution_paths, bench_interpolation);
criterion_main!(benches);
