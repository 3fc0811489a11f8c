//! Benchmark for the pattern-matching engine and container chaining.
//!
//! Compares `Match` against a native `match` on the same shapes, and measures
//! the cost of panic capture in `Attempt`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vessel::control::{Attempt, Optional};
use vessel::pattern::{Match, absent, any, pair, present, wildcard};

// =============================================================================
// Match Benchmarks
// =============================================================================

fn benchmark_match_case_position(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("match_case_position");

    for position in [0_i32, 4, 9] {
        group.bench_with_input(
            BenchmarkId::new("engine", position),
            &position,
            |bencher, &position| {
                bencher.iter(|| {
                    let subject = black_box(position);
                    let mut matcher = Match::on(&subject);
                    for candidate in 0..10 {
                        matcher = matcher.case_if(any(), |n: &i32| *n == candidate, |n| n * 2);
                    }
                    black_box(matcher.otherwise(|| -1))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("native", position),
            &position,
            |bencher, &position| {
                bencher.iter(|| {
                    let subject = black_box(position);
                    let result = match subject {
                        n @ 0..=9 => n * 2,
                        _ => -1,
                    };
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_pair_destructuring(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pair_destructuring");
    let subject = (Optional::<u64>::absent(), Optional::present(7_u64));

    group.bench_function("engine", |bencher| {
        bencher.iter(|| {
            let result = Match::on(black_box(&subject))
                .case(pair(present(any()), present(any())), |(a, b)| a + b)
                .case(pair(present(any()), absent()), |(a, ())| a)
                .case(pair(absent(), present(any())), |((), b)| b)
                .case(wildcard(), |()| 0)
                .get();
            black_box(result)
        });
    });

    group.bench_function("native", |bencher| {
        bencher.iter(|| {
            let result = match black_box(&subject) {
                (Optional::Present(a), Optional::Present(b)) => a + b,
                (Optional::Present(a), Optional::Absent) => *a,
                (Optional::Absent, Optional::Present(b)) => *b,
                (Optional::Absent, Optional::Absent) => 0,
            };
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Attempt Benchmarks
// =============================================================================

fn benchmark_attempt_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("attempt_chain");

    for length in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("map", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut attempt = Attempt::success(black_box(0_u64));
                    for _ in 0..length {
                        attempt = attempt.map(|n| n + 1);
                    }
                    black_box(attempt.get_or_else(0))
                });
            },
        );
    }

    group.bench_function("parse_failure", |bencher| {
        bencher.iter(|| {
            let attempt = Attempt::of(|| black_box("not a number").parse::<u64>());
            black_box(attempt.is_failure())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_match_case_position,
    benchmark_pair_destructuring,
    benchmark_attempt_chain
);
criterion_main!(benches);
