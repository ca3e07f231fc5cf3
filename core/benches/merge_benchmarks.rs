use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion
use trolley::{merge_line_items, Cart, CartAggregator, CartLineItem, InMemoryCartStore, WriteMode};

fn line_items(prefix: &str, count: usize) -> Vec<CartLineItem> {
  (0..count)
    .map(|i| CartLineItem::new(format!("{}-{}", prefix, i), 1))
    .collect()
}

// Half of the incoming batch hits existing ids, half is new.
fn half_overlapping(existing: usize, incoming: usize) -> (Vec<CartLineItem>, Vec<CartLineItem>) {
  let current = line_items("item", existing);
  let mut batch = line_items("item", incoming / 2);
  batch.extend(line_items("new", incoming - incoming / 2));
  (current, batch)
}

fn bench_merge_line_items(c: &mut Criterion) {
  let mut group = c.benchmark_group("MergeLineItems");

  for size in [10usize, 100, 1_000, 10_000].iter() {
    group.throughput(Throughput::Elements(*size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
      b.iter_batched(
        || half_overlapping(size, size),
        |(mut current, batch)| {
          merge_line_items(&mut current, batch);
          current
        },
        BatchSize::SmallInput,
      );
    });
  }
  group.finish();
}

fn bench_aggregator_add_items(c: &mut Criterion) {
  let mut group = c.benchmark_group("AggregatorAddItems");
  let rt = Runtime::new().unwrap();

  for mode in [WriteMode::Unguarded, WriteMode::SerializedPerUser] {
    group.bench_function(BenchmarkId::new("mode", format!("{:?}", mode)), |b| {
      b.to_async(&rt).iter_batched(
        || {
          let store = Arc::new(InMemoryCartStore::with_carts([Cart::new("bench", line_items("item", 50))]));
          let batch = half_overlapping(0, 20).1;
          (CartAggregator::new(store).with_write_mode(mode), batch)
        },
        |(aggregator, batch)| async move { aggregator.add_items("bench", batch).await.unwrap() },
        BatchSize::SmallInput,
      );
    });
  }
  group.finish();
}

criterion_group!(benches, bench_merge_line_items, bench_aggregator_add_items);
criterion_main!(benches);
