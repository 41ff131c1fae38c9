use criterion::{criterion_group, criterion_main};

mod format;
mod sort;

criterion_group!(
    benches,
    format::bench_literal,
    format::bench_numeric,
    format::bench_truncated,
    sort::bench_sorted,
    sort::bench_reversed
);
criterion_main!(benches);
