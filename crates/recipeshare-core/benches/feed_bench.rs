//! Performance benchmarks for home feed derivation
//!
//! The feed is recomputed on every keystroke in the search box, so it has to
//! stay well under a frame for realistic catalogue sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recipeshare_core::feed::{filter_and_sort, FeedFilter};
use recipeshare_core::types::Recipe;

/// Generate test recipes for benchmarking
fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| Recipe {
            id: format!("recipe-{}", i),
            title: format!("Recipe number {}", i),
            description: if i % 3 == 0 { "quick dinner".into() } else { "slow roast".into() },
            tags: vec!["Dinner".into(), "Vegan".into()],
            cook_time_minutes: (i % 60) as u32,
            liked_user_ids: (0..i % 25).map(|u| format!("user-{}", u)).collect(),
            ..Default::default()
        })
        .collect()
}

fn feed_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_sort");

    for count in [100, 1000, 10_000] {
        let recipes = generate_recipes(count);
        group.bench_with_input(BenchmarkId::new("recipes", count), &recipes, |b, recipes| {
            b.iter(|| black_box(filter_and_sort(recipes, "number 1", FeedFilter::Dinner)));
        });
    }

    group.finish();
}

criterion_group!(benches, feed_benchmark);
criterion_main!(benches);
