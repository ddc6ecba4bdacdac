#![allow(missing_docs)]
//! Throughput of `jsonvet::parse` against `serde_json` on generated inputs.

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{
    BenchmarkGroup, Criterion, Throughput, criterion_group, criterion_main, measurement::WallTime,
};
use jsonvet::{Lexer, ParserOptions, parse_with_options};
use serde_json::Value as SerdeValue;

fn int_array(n: usize) -> String {
    let items: Vec<String> = (0..n).map(|i| (i * 7919).to_string()).collect();
    format!("[{}]", items.join(","))
}

fn float_array(n: usize) -> String {
    let mut out = String::from("[");
    for i in 0..n {
        if i > 0 {
            out.push(',');
        }
        #[allow(clippy::cast_precision_loss)]
        let x = i as f64 * 0.125 - 3.5;
        write!(out, "{x:e}").unwrap();
    }
    out.push(']');
    out
}

fn records(n: usize) -> String {
    let mut out = String::from("[");
    for i in 0..n {
        if i > 0 {
            out.push(',');
        }
        write!(
            out,
            r#"{{"id":{i},"name":"user {i}","tags":["a","b\n","é"],"active":{},"score":{}.5,"parent":null}}"#,
            i % 2 == 0,
            i % 100
        )
        .unwrap();
    }
    out.push(']');
    out
}

fn nested(depth: usize) -> String {
    format!("{}{}", r#"{"k":["#.repeat(depth), "]}".repeat(depth))
}

fn bench_input(name: &str, json: &str, group: &mut BenchmarkGroup<'_, WallTime>) {
    let options = ParserOptions { max_depth: 512 };
    group.throughput(Throughput::Bytes(json.len() as u64));

    group.bench_function(format!("{name}/jsonvet_value"), |b| {
        b.iter(|| black_box(parse_with_options(black_box(json), options).unwrap()));
    });

    group.bench_function(format!("{name}/jsonvet_tokens"), |b| {
        b.iter(|| {
            let count = Lexer::new(black_box(json))
                .map(Result::unwrap)
                .count();
            black_box(count)
        });
    });

    group.bench_function(format!("{name}/serde_value"), |b| {
        b.iter(|| black_box(serde_json::from_str::<SerdeValue>(black_box(json)).unwrap()));
    });
}

fn parse_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.measurement_time(Duration::from_secs(5));

    bench_input("ints_10k", &int_array(10_000), &mut group);
    bench_input("floats_10k", &float_array(10_000), &mut group);
    bench_input("records_1k", &records(1_000), &mut group);
    bench_input("nested_200", &nested(200), &mut group);

    group.finish();
}

criterion_group!(benches, parse_benches);
criterion_main!(benches);
