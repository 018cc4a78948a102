use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use ludolog::{parse, summarize};

fn synthetic_log(levels: usize) -> String {
    let mut words = Vec::with_capacity(levels * 6);
    for level in 0..levels {
        words.push("start");
        if level % 3 == 0 {
            words.push("boostHammer");
        }
        if level % 4 == 0 {
            words.push("lose");
            words.push("start");
        }
        words.push("win");
    }
    words.join(" ")
}

fn bench_parse_short_log(c: &mut Criterion) {
    let log = synthetic_log(10);
    c.bench_function("parse_short_log", |b| {
        b.iter(|| {
            black_box(parse(black_box(&log)).unwrap());
        });
    });
}

fn bench_parse_long_log(c: &mut Criterion) {
    let log = synthetic_log(500);
    c.bench_function("parse_long_log", |b| {
        b.iter(|| {
            black_box(parse(black_box(&log)).unwrap());
        });
    });
}

fn bench_summarize_batch(c: &mut Criterion) {
    let logs: Vec<String> = (0..64).map(|_| synthetic_log(50)).collect();
    c.bench_function("summarize_batch_64", |b| {
        b.iter(|| {
            black_box(summarize(black_box(logs.clone())).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_parse_short_log,
    bench_parse_long_log,
    bench_summarize_batch
);
criterion_main!(benches);
