//! Benchmarks for list operations.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use anchorlist::List;

const N: usize = 10_000;

/// Deterministic scramble of 0..n, avoids pre-sorted input for the sort
/// benchmarks without pulling in an RNG.
fn scrambled(n: usize) -> Vec<u64> {
    (0..n as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) % n as u64)
        .collect()
}

// ============================================================================
// Push / pop
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("push_back_pop_front", |b| {
        let mut list: List<u64> = List::with_capacity(N);
        b.iter(|| {
            for i in 0..N as u64 {
                black_box(list.push_back(i));
            }
            while let Ok(value) = list.pop_front() {
                black_box(value);
            }
        });
    });

    group.bench_function("push_front_pop_back", |b| {
        let mut list: List<u64> = List::with_capacity(N);
        b.iter(|| {
            for i in 0..N as u64 {
                black_box(list.push_front(i));
            }
            while let Ok(value) = list.pop_back() {
                black_box(value);
            }
        });
    });

    group.finish();
}

// ============================================================================
// Cursor traversal
// ============================================================================

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    group.throughput(Throughput::Elements(N as u64));

    let list: List<u64> = (0..N as u64).collect();

    group.bench_function("iter_sum", |b| {
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });

    group.bench_function("cursor_walk", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            let mut pos = list.begin();
            while pos != list.end() {
                sum += *list.get(pos).unwrap();
                pos = list.next(pos).unwrap();
            }
            black_box(sum)
        });
    });

    group.finish();
}

// ============================================================================
// Bulk algorithms
// ============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.throughput(Throughput::Elements(N as u64));

    let input = scrambled(N);

    group.bench_function("scrambled", |b| {
        b.iter(|| {
            let mut list: List<u64> = input.iter().copied().collect();
            list.sort();
            black_box(list.len())
        });
    });

    group.bench_function("presorted", |b| {
        b.iter(|| {
            let mut list: List<u64> = (0..N as u64).collect();
            list.sort();
            black_box(list.len())
        });
    });

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("interleaved", |b| {
        b.iter(|| {
            let mut a: List<u64> = (0..N as u64).step_by(2).collect();
            let mut b2: List<u64> = (1..N as u64).step_by(2).collect();
            a.merge(&mut b2);
            black_box(a.len())
        });
    });

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    group.throughput(Throughput::Elements(N as u64));

    let mut list: List<u64> = (0..N as u64).collect();

    group.bench_function("in_place", |b| {
        b.iter(|| {
            list.reverse();
            black_box(list.len())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_traversal,
    bench_sort,
    bench_merge,
    bench_reverse
);
criterion_main!(benches);
