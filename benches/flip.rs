use biheap::core::BiHeap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use depq::PriorityDeque;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn priorities(n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.gen()).collect()
}

/// Drain by taking min and max in turns, the worst case for a single heap.
fn alternating(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternating");
    for n in [1_000usize, 10_000] {
        let input = priorities(n);
        group.bench_with_input(BenchmarkId::new("depq", n), &input, |b, input| {
            b.iter(|| {
                let mut pq = PriorityDeque::new();
                for p in input {
                    pq.insert((), *p).unwrap();
                }
                for _ in 0..64 {
                    black_box(pq.extract_min().ok());
                    black_box(pq.extract_max().ok());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("biheap", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = BiHeap::new();
                for p in input {
                    heap.push(*p);
                }
                for _ in 0..64 {
                    black_box(heap.pop_min());
                    black_box(heap.pop_max());
                }
            })
        });
    }
    group.finish();
}

/// Drain one side only, where no flip ever happens after the first.
fn one_sided(c: &mut Criterion) {
    let input = priorities(10_000);
    c.bench_function("one_sided_max", |b| {
        b.iter(|| {
            let mut pq = PriorityDeque::new();
            for p in &input {
                pq.insert((), *p).unwrap();
            }
            while let Ok(entry) = pq.extract_max() {
                black_box(entry);
            }
        })
    });
}

criterion_group!(benches, alternating, one_sided);
criterion_main!(benches);
