//! Compile and Evaluate Benchmarks
//!
//! Measures compile throughput and per-point evaluation cost, from small
//! textbook expressions up to long generated ones (N >= 300 terms).

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mathparse::{compile, evaluate_str};
use std::fmt::Write;
use std::hint::black_box;

// =============================================================================
// Expression Generator
// =============================================================================

/// Generates a mixed expression with N terms
/// Includes: polynomials, trig, exponentials, fractions, and nested functions
fn generate_mixed(n: usize) -> String {
    let mut s = String::with_capacity(n * 40);
    for i in 1..=n {
        if i > 1 {
            s.push_str(if i % 3 == 1 { " - " } else { " + " });
        }
        let _ = match i % 5 {
            0 => write!(s, "{}*x^{}", i, i % 10 + 1),
            1 => write!(s, "sin({i}*x)*cos(x)"),
            2 => write!(s, "(exp(x/{i}) + ln(x + {i}))"),
            3 => write!(s, "(x^2 + {i})/(x + {i})"),
            _ => write!(s, "sin(exp(x) + {i})"),
        };
    }
    s
}

const SMALL: &[(&str, &str)] = &[
    ("poly", "3*x^3 - 2*x^2 + x - 7"),
    ("trig", "sin(2*x)*cos(x)"),
    ("nested", "log10(x*sin(30*x))"),
];

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for (name, src) in SMALL {
        group.bench_function(*name, |b| b.iter(|| compile(black_box(src))));
    }
    for n in [100, 300] {
        let src = generate_mixed(n);
        group.bench_with_input(BenchmarkId::new("mixed", n), &src, |b, src| {
            b.iter(|| compile(black_box(src)));
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for (name, src) in SMALL {
        let Ok(program) = compile(src) else {
            continue;
        };
        group.bench_function(*name, |b| b.iter(|| program.evaluate(black_box(0.7))));
    }
    for n in [100, 300] {
        let Ok(program) = compile(&generate_mixed(n)) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("mixed", n), &program, |b, program| {
            b.iter(|| program.evaluate(black_box(0.7)));
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let xs: Vec<f64> = (0..10_000).map(|i| f64::from(i) * 1e-3).collect();
    let Ok(program) = compile(&generate_mixed(50)) else {
        return;
    };

    group.bench_function("sequential", |b| {
        b.iter(|| program.evaluate_batch(black_box(&xs)));
    });
    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| program.evaluate_batch_parallel(black_box(&xs)));
    });
    group.bench_function("compile_each_time", |b| {
        b.iter(|| evaluate_str(black_box(SMALL[1].1), black_box(0.7)));
    });
    group.finish();
}

criterion_group!(benches, bench_compile, bench_evaluate, bench_batch);
criterion_main!(benches);
