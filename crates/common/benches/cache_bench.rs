//! Cache benchmarks
//!
//! Benchmarks for canonical handle lookups in both directions, fetch-or-compute
//! storage, and contended access.
//!
//! Run with: `cargo bench --bench cache_bench -p boxcache-common`

use std::sync::Arc;
use std::thread;

use boxcache_common::cache::{BoxingCache, CacheStorage, Handle};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Boxing Cache Benchmarks
// ============================================================================

fn bench_get_handle_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("boxing_get_handle_hit");

    for size in [100, 1000, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("u64", size), &size, |b, &size| {
            let cache: BoxingCache<u64> = BoxingCache::new();
            for i in 0..size as u64 {
                let _ = cache.get_handle(i);
            }
            let mut counter = 0u64;
            b.iter(|| {
                let value = counter % (size as u64);
                let _ = black_box(cache.get_handle(black_box(value)));
                counter = counter.wrapping_add(1);
            });
        });
    }

    group.finish();
}

fn bench_get_handle_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("boxing_get_handle_miss");
    group.throughput(Throughput::Elements(1));

    group.bench_function("u64", |b| {
        let cache: BoxingCache<u64> = BoxingCache::new();
        let mut counter = 0u64;
        b.iter(|| {
            let _ = black_box(cache.get_handle(black_box(counter)));
            counter = counter.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_get_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("boxing_get_value");

    for size in [100, 1000, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("string", size), &size, |b, &size| {
            let cache: BoxingCache<String> = BoxingCache::new();
            let handles: Vec<Handle<String>> =
                (0..size).map(|i| cache.get_handle(format!("value_{}", i))).collect();
            let mut counter = 0usize;
            b.iter(|| {
                let handle = &handles[counter % size];
                let _ = black_box(cache.get_value(black_box(handle)));
                counter = counter.wrapping_add(1);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Storage Benchmarks
// ============================================================================

fn bench_storage_fetch_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_fetch_hit");
    group.throughput(Throughput::Elements(1));

    group.bench_function("u64", |b| {
        let storage: CacheStorage<u64, u64> = CacheStorage::new();
        for i in 0..1000u64 {
            let _ = storage.get_from_cache_or_fetch(i, || Some(i * 2));
        }
        let mut counter = 0u64;
        b.iter(|| {
            let key = counter % 1000;
            let _ = black_box(storage.get_from_cache_or_fetch(black_box(key), || None));
            counter = counter.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Contention Benchmarks
// ============================================================================

fn bench_contended_get_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("boxing_contended_get_handle");

    for threads in [2, 4, 8] {
        group.throughput(Throughput::Elements(threads as u64 * 1000));
        group.bench_with_input(BenchmarkId::new("threads", threads), &threads, |b, &threads| {
            let cache = Arc::new(BoxingCache::<u32>::new());
            b.iter(|| {
                let workers: Vec<_> = (0..threads)
                    .map(|_| {
                        let cache = Arc::clone(&cache);
                        thread::spawn(move || {
                            for i in 0..1000u32 {
                                black_box(cache.get_handle(i % 64));
                            }
                        })
                    })
                    .collect();
                for worker in workers {
                    let _ = worker.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_get_handle_hit,
    bench_get_handle_miss,
    bench_get_value,
    bench_storage_fetch_hit,
    bench_contended_get_handle,
);
criterion_main!(benches);
