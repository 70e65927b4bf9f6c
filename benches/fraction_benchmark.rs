// ============================================================================
// Fraction Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Conversion - mixed <-> improper round trips
// 2. Arithmetic - the four binary operators
// 3. Rounding - each direction across binary denominators
// 4. Calculator - full keypress sequences through the state machine
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fraction_calc::prelude::*;

fn sample_operands() -> (Fraction, Fraction) {
    (
        Fraction::new(Sign::Positive, 12, 7, 16),
        Fraction::new(Sign::Negative, 3, 5, 24),
    )
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let (a, _) = sample_operands();

    group.bench_function("to_improper", |b| {
        b.iter(|| black_box(to_improper_fraction(black_box(&a))))
    });

    group.bench_function("to_proper", |b| {
        b.iter(|| black_box(to_proper_fraction(black_box(-1_234_567), black_box(4_096))))
    });

    group.bench_function("simplify_proper", |b| {
        let unreduced = Fraction::new(Sign::Positive, 5, 96, 256);
        b.iter(|| black_box(simplify_proper_fraction(black_box(&unreduced))))
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let (a, b) = sample_operands();

    for op in Operator::ALL {
        group.bench_with_input(BenchmarkId::new("perform_operation", op.tag()), &op, |bench, op| {
            bench.iter(|| black_box(perform_operation(black_box(&a), *op, black_box(&b))))
        });
    }

    group.finish();
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding");
    let value = Fraction::new(Sign::Positive, 7, 11, 13);

    for den in [2u32, 16, 256] {
        group.bench_with_input(BenchmarkId::new("nearest", den), &den, |b, den| {
            b.iter(|| black_box(round_fraction(black_box(&value), *den)))
        });
        group.bench_with_input(BenchmarkId::new("ceil", den), &den, |b, den| {
            b.iter(|| black_box(ceil_fraction(black_box(&value), *den)))
        });
        group.bench_with_input(BenchmarkId::new("floor", den), &den, |b, den| {
            b.iter(|| black_box(floor_fraction(black_box(&value), *den)))
        });
    }

    group.finish();
}

// ============================================================================
// Calculator Benchmarks
// ============================================================================

fn benchmark_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");

    let actions = [
        Action::Input { field: Field::Whole, value: 5 },
        Action::Input { field: Field::Numerator, value: 3 },
        Action::Input { field: Field::Denominator, value: 8 },
        Action::Operation(Operator::Divide),
        Action::Input { field: Field::Whole, value: 3 },
        Action::Equals,
        Action::Equals,
    ];

    for (name, config) in [
        ("decimal", CalculatorConfig::decimal()),
        ("carpenter", CalculatorConfig::carpenter()),
    ] {
        group.bench_with_input(BenchmarkId::new("keypress_sequence", name), &config, |b, config| {
            b.iter(|| {
                let state = actions
                    .iter()
                    .try_fold(CalculatorState::new(), |s, a| s.apply(a, config));
                black_box(state)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion,
    benchmark_arithmetic,
    benchmark_rounding,
    benchmark_calculator
);
criterion_main!(benches);
