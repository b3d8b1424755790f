// benches/pinyin_bench.rs
// Criterion benchmark over the three hot paths: full conversion,
// script normalization, and search-key extraction (initials).

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use hanpin::{PinyinFormat, Transliterator};

fn corpus(repeats: usize) -> String {
    // Mixed text: phrase overrides, polyphones, Traditional forms, ASCII.
    "中国人民银行重庆分行行长说普通话。Rust 2024! 漢語學習者在成都便宜行事。"
        .repeat(repeats)
}

fn bench_conversion(c: &mut Criterion) {
    let t = Transliterator::new();
    let text = corpus(16);

    let mut group = c.benchmark_group("conversion");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("to_pinyin_without_tone", |b| {
        b.iter(|| t.to_pinyin(black_box(&text)).unwrap())
    });
    group.bench_function("to_pinyin_tone_number", |b| {
        b.iter(|| {
            t.to_pinyin_with(black_box(&text), " ", PinyinFormat::WithToneNumber)
                .unwrap()
        })
    });
    group.bench_function("to_pinyin_lenient", |b| {
        b.iter(|| t.to_pinyin_lenient(black_box(&text)))
    });
    group.finish();
}

fn bench_script(c: &mut Criterion) {
    let t = Transliterator::new();
    let text = corpus(16);

    let mut group = c.benchmark_group("script");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("to_simplified", |b| {
        b.iter(|| t.to_simplified(black_box(&text)))
    });
    group.bench_function("to_traditional", |b| {
        b.iter(|| t.to_traditional(black_box(&text)))
    });
    group.finish();
}

fn bench_search_keys(c: &mut Criterion) {
    let t = Transliterator::new();
    let text = corpus(4);

    c.bench_function("initials", |b| b.iter(|| t.initials(black_box(&text))));
    c.bench_function("first_syllable", |b| {
        b.iter(|| t.first_syllable(black_box(&text)))
    });
}

criterion_group!(benches, bench_conversion, bench_script, bench_search_keys);
criterion_main!(benches);
