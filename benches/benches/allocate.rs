// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_sheet_layout::{Item, ItemTag, SheetModel, allocate};

struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// `n` rows: every tenth required, a third shrinkable, random priorities and heights.
fn gen_items(n: usize) -> Vec<Item> {
    let mut rng = Rng::new(0x5EE7_A110_C8ED_0001);
    (0..n)
        .map(|i| {
            let height = 33.0 + (rng.next_f64() * 60.0).floor();
            let mut item = Item::new(ItemTag(i as i32), height)
                .with_priority((rng.next_f64() * 8.0) as i32);
            if i % 10 == 0 {
                item = item.required();
            }
            if i % 3 == 0 {
                item = item.shrinkable(height * 0.5);
            }
            item
        })
        .collect()
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    for &n in &[8_usize, 64, 512] {
        let items = gen_items(n);
        let total: f64 = n as f64 * 60.0;
        group.throughput(Throughput::Elements(n as u64));
        for (label, fraction) in [("fits", 1.5), ("half", 0.5), ("tight", 0.1)] {
            group.bench_function(format!("{label}_n{n}"), |b| {
                b.iter_batched(
                    || items.clone(),
                    |mut items| black_box(allocate(&mut items, total * fraction)),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_relayout_sweep(c: &mut Criterion) {
    // A keyboard animation re-runs layout every frame with a slightly different budget.
    let mut group = c.benchmark_group("relayout_sweep");
    let n = 64;
    let mut model = SheetModel::new();
    for item in gen_items(n) {
        model.add_item(item);
    }
    let budgets: Vec<f64> = (0..60).map(|f| 700.0 - f64::from(f) * 5.0).collect();
    group.throughput(Throughput::Elements(budgets.len() as u64));
    group.bench_function(format!("model_n{n}_60_frames"), |b| {
        b.iter(|| {
            for &budget in &budgets {
                black_box(model.update_items(budget));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_allocate, bench_relayout_sweep);
criterion_main!(benches);
