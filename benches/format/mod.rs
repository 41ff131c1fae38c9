use criterion::{Criterion, Throughput};
use libfree::format::{Arg, FORMAT_CAPACITY, format, format_into};
use std::hint::black_box;

const BANNER: &[u8] = b"loader: probing attached storage devices, please wait";

pub fn bench_literal(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_literal");
    group.throughput(Throughput::Bytes(BANNER.len() as u64));
    group.bench_function("banner", |b| {
        let mut buf = [0u8; FORMAT_CAPACITY];
        b.iter(|| format(&mut buf, black_box(BANNER), &[]))
    });
    group.finish();
}

pub fn bench_numeric(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_numeric");
    let args = [
        Arg::from(-123456i32),
        Arg::from(0xdead_beefu32),
        Arg::from(0o777u32),
        Arg::from("sda1"),
    ];
    group.bench_function("mixed", |b| {
        let mut buf = [0u8; FORMAT_CAPACITY];
        b.iter(|| format(&mut buf, black_box(b"%08d %#010x %#o %5s"), black_box(&args)))
    });
    group.finish();
}

pub fn bench_truncated(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_truncated");
    group.bench_function("16_byte_window", |b| {
        let mut buf = [0u8; 16];
        b.iter(|| format_into(&mut buf, black_box(BANNER), &[]))
    });
    group.finish();
}
