//! Micro benchmarks for the in-memory B-tree.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use b3rtree::BTree;

const KEY_COUNT: i32 = 16_384;

fn shuffled_keys(seed: u64) -> Vec<i32> {
    let mut keys: Vec<i32> = (0..KEY_COUNT).collect();
    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree/insert");
    group.throughput(Throughput::Elements(KEY_COUNT as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let tree: BTree = (0..KEY_COUNT).collect();
            black_box(tree.height());
        });
    });

    let keys = shuffled_keys(0xBEEF);
    for degree in [3usize, 5, 9] {
        group.bench_with_input(BenchmarkId::new("random", degree), &degree, |b, &degree| {
            b.iter(|| {
                let mut tree = BTree::with_degree(degree).unwrap();
                tree.extend(keys.iter().copied());
                black_box(tree.height());
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree/search");
    let tree: BTree = shuffled_keys(1).into_iter().collect();
    let probes = shuffled_keys(2);

    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("hit", |b| {
        b.iter(|| probes.iter().filter(|&&k| tree.search(black_box(k))).count());
    });
    group.bench_function("miss", |b| {
        b.iter(|| probes.iter().filter(|&&k| tree.search(black_box(k + KEY_COUNT))).count());
    });

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree/delete");
    let keys = shuffled_keys(3);
    let order = shuffled_keys(4);

    group.throughput(Throughput::Elements(KEY_COUNT as u64));
    group.bench_function("drain_random", |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTree>(),
            |mut tree| {
                for &key in &order {
                    tree.delete(key);
                }
                black_box(tree.is_empty());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_delete);
criterion_main!(benches);
