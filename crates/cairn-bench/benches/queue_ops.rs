//! Criterion micro-benchmarks for priority queue operations.

use cairn_bench::shuffled_values;
use cairn_queue::PriorityQueue;
use cairn_region::Region;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Enqueue 10K shuffled values into a fresh queue, crossing several
/// growth boundaries.
fn bench_enqueue_10k(c: &mut Criterion) {
    let values = shuffled_values(10_000, 42);
    c.bench_function("queue_enqueue_10k", |b| {
        b.iter(|| {
            let region = Region::new();
            let mut queue = PriorityQueue::new(&region);
            for &v in &values {
                queue.enqueue(black_box(v));
            }
            black_box(queue.len());
        });
    });
}

/// Steady-state churn: one dequeue and one enqueue against a queue held
/// at 1K elements, so no growth occurs inside the measured loop.
fn bench_churn_1k(c: &mut Criterion) {
    let values = shuffled_values(1_000, 7);
    let region = Region::new();
    let mut queue = PriorityQueue::new(&region);
    queue.enqueue_all(values.iter().copied());

    c.bench_function("queue_churn_1k", |b| {
        b.iter(|| {
            let v = queue.dequeue().unwrap();
            queue.enqueue(black_box(v / 2));
        });
    });
}

/// Drain 10K elements to empty, the worst case for sift-down.
fn bench_drain_10k(c: &mut Criterion) {
    let values = shuffled_values(10_000, 13);
    c.bench_function("queue_drain_10k", |b| {
        b.iter(|| {
            let region = Region::new();
            let mut queue = PriorityQueue::new(&region);
            queue.enqueue_all(values.iter().copied());
            while let Some(v) = queue.dequeue() {
                black_box(v);
            }
        });
    });
}

criterion_group!(benches, bench_enqueue_10k, bench_churn_1k, bench_drain_10k);
criterion_main!(benches);
