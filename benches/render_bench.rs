//! Benchmarks for template compilation and callstack execution.
//!
//! Tests:
//! - Compile cost for small and wide templates
//! - Write throughput per generator type
//! - Full INSERT row rendering

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use datastencil::{build_callstack, GeneratorKind, Sources};
use std::hint::black_box;

const INSERT_ROW: &str = "INSERT INTO floof VALUES ('{guid}','{time}','{guid:ordinal:0}','{country}',{int:min:-2000|max:0},{int:min:100|max:1000},{float:min:-1000.0|max:-540.0},{int:min:1|max:40},'{now}','{now:ordinal:0}','{unicode:length:2|case:up}',NULL,-3)";

/// Template with `width` int placeholders separated by commas
fn wide_template(width: usize) -> String {
    let columns: Vec<&str> = (0..width).map(|_| "{int:min:1|max:1000}").collect();
    format!("INSERT INTO t VALUES ({});", columns.join(","))
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    group.bench_function("insert_row", |b| {
        b.iter(|| black_box(build_callstack(black_box(INSERT_ROW)).unwrap()))
    });

    for width in [10, 100, 1000] {
        let template = wide_template(width);
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::new("wide", width), &template, |b, t| {
            b.iter(|| black_box(build_callstack(black_box(t)).unwrap()))
        });
    }

    group.finish();
}

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");
    let mut sources = Sources::seeded(42);

    for kind in GeneratorKind::ALL {
        let callstack = build_callstack(&format!("{{{}}}", kind.name())).unwrap();
        let mut sink = Vec::with_capacity(64);
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                sink.clear();
                callstack.write_with(&mut sink, &mut sources).unwrap();
                black_box(&sink);
            })
        });
    }

    group.finish();
}

fn bench_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("rows");
    let callstack = build_callstack(INSERT_ROW).unwrap();
    let mut sources = Sources::seeded(42);
    let mut sink = Vec::with_capacity(512);

    group.throughput(Throughput::Elements(1));
    group.bench_function("insert_row", |b| {
        b.iter(|| {
            sink.clear();
            callstack.write_with(&mut sink, &mut sources).unwrap();
            black_box(&sink);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compile, bench_generators, bench_rows);

criterion_main!(benches);
