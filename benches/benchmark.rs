use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use inventory_avl::Inventory;

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let codes: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("inventory_insert", |b| {
        b.iter(|| {
            let mut inventory = Inventory::new();
            for code in &codes {
                inventory.insert(*code);
            }
            black_box(inventory.len())
        })
    });

    let inventory: Inventory = codes.iter().copied().collect();

    c.bench_function("inventory_search", |b| {
        b.iter(|| {
            for code in &codes {
                black_box(inventory.search(code));
            }
        })
    });

    c.bench_function("inventory_ascending", |b| {
        b.iter(|| {
            for code in inventory.ascending() {
                black_box(code);
            }
        })
    });

    c.bench_function("inventory_hierarchical", |b| {
        b.iter(|| {
            for code in inventory.hierarchical() {
                black_box(code);
            }
        })
    });

    c.bench_function("inventory_level_order", |b| {
        b.iter(|| {
            for code in inventory.level_order() {
                black_box(code);
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
