use criterion::{BatchSize, Criterion};
use libfree::sort::sort;
use std::cmp::Ordering;

const COUNT: usize = 64;

fn table(reversed: bool) -> Vec<u8> {
    let mut values: Vec<u32> = (0..COUNT as u32).collect();
    if reversed {
        values.reverse();
    }
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn cmp_u32(a: &[u8], b: &[u8]) -> Ordering {
    let a = u32::from_le_bytes([a[0], a[1], a[2], a[3]]);
    let b = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
    a.cmp(&b)
}

pub fn bench_sorted(c: &mut Criterion) {
    c.bench_function("sort_sorted_64", |b| {
        b.iter_batched(
            || table(false),
            |mut bytes| sort(&mut bytes, COUNT, 4, cmp_u32),
            BatchSize::SmallInput,
        )
    });
}

pub fn bench_reversed(c: &mut Criterion) {
    c.bench_function("sort_reversed_64", |b| {
        b.iter_batched(
            || table(true),
            |mut bytes| sort(&mut bytes, COUNT, 4, cmp_u32),
            BatchSize::SmallInput,
        )
    });
}
