use causeway::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

mod codes {
    causeway::define_error_category!(40, BENCH_ERRORS);
    causeway::define_error_code!(1, BENCH_ERRORS, UNKNOWN, "Undefined error");
    causeway::define_error_code!(2, BENCH_ERRORS, SATURATED, "Bench saturated");
}
use codes::*;

fn succeed() -> Outcome<u64> {
    ok(1)
}

fn fail() -> Outcome<u64> {
    err!(UNKNOWN, "bench failure")
}

fn chain(depth: u32) -> Outcome<u64> {
    if depth == 0 {
        return fail();
    }
    let value = attempt!(chain(depth - 1));
    ok(value)
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("construction/ok", |b| {
        b.iter(|| black_box(succeed()).into_value())
    });

    c.bench_function("construction/failed", |b| {
        b.iter(|| black_box(fail()).into_error().code())
    });

    c.bench_function("construction/failed_with_data", |b| {
        b.iter(|| {
            let outcome: Outcome<u64> = err!(UNKNOWN, "bench failure", data: 42u64);
            black_box(outcome).into_error().has_data()
        })
    });
}

fn bench_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagation");
    for depth in [1u32, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(chain(depth)).into_error().causes().count())
        });
    }
    group.finish();
}

fn bench_recovery(c: &mut Criterion) {
    c.bench_function("recovery/handled", |b| {
        b.iter(|| {
            fail()
                .handle_error(|error| {
                    if *error == UNKNOWN {
                        ok(0)
                    } else {
                        err!(SATURATED, "gave up")
                    }
                })
                .into_value()
        })
    });

    c.bench_function("recovery/recovery_failed", |b| {
        b.iter(|| {
            fail()
                .handle_error(|_| err!(SATURATED, "gave up"))
                .into_error()
                .causes()
                .count()
        })
    });
}

fn bench_rendering(c: &mut Criterion) {
    let report_source = chain(8).into_error();
    c.bench_function("rendering/full_report", |b| {
        b.iter(|| format!("{:#}", black_box(&report_source)))
    });

    c.bench_function("rendering/compact", |b| {
        b.iter(|| format!("{}", black_box(&report_source)))
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_propagation,
    bench_recovery,
    bench_rendering
);
criterion_main!(benches);
