// Benchmarks for the composite distance and the permutation index
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use uisim::{
    BehaviorFeatures, ColorPoint, ComponentDistance, ComponentSignature, CssFeatures, Distance,
    DomFeatures, PermutationIndex, PivotSelector, UiFramework,
};
use uisim_core::{histogram, labels};

const TAGS: [&str; 8] = ["div", "span", "button", "input", "ul", "li", "a", "img"];
const TOKENS: [&str; 6] = ["flex", "grid", "p-2", "m-4", "rounded", "shadow"];
const EVENTS: [&str; 5] = ["click", "change", "submit", "focus", "blur"];

fn generate_random_signature(id: usize, rng: &mut StdRng) -> ComponentSignature {
    let tags: Vec<(&str, u32)> = TAGS.iter().map(|t| (*t, rng.random_range(0..5))).collect();
    let tokens: Vec<(&str, u32)> = TOKENS.iter().map(|t| (*t, rng.random_range(0..3))).collect();
    let events: Vec<&str> = EVENTS.choose_multiple(rng, 2).copied().collect();
    let palette = (0..4)
        .map(|_| {
            ColorPoint::new(
                rng.random_range(0.0..100.0),
                rng.random_range(-60.0..60.0),
                rng.random_range(-60.0..60.0),
            )
        })
        .collect();

    ComponentSignature::new(
        format!("bench:src/C{}.tsx#C{}", id, id),
        UiFramework::React,
        DomFeatures {
            tag_histogram: histogram(tags),
            layout_patterns: labels(["flex-row", "card"]),
            depth: rng.random_range(1..12),
            avg_branching: rng.random_range(0.5..5.0),
            ..Default::default()
        },
        CssFeatures {
            style_tokens: histogram(tokens),
            palette,
            spacing_mean: rng.random_range(0.0..24.0),
            spacing_std: rng.random_range(0.0..6.0),
            ..Default::default()
        },
        BehaviorFeatures {
            event_types: labels(events),
            cyclomatic: rng.random_range(1..15),
            handler_count: rng.random_range(0..6),
            api_call_count: rng.random_range(0..4),
            conditional_count: rng.random_range(0..8),
            ..Default::default()
        },
    )
}

fn generate_dataset(size: usize) -> Vec<ComponentSignature> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|i| generate_random_signature(i, &mut rng)).collect()
}

fn benchmark_composite_distance(c: &mut Criterion) {
    let dataset = generate_dataset(2);
    let distance = ComponentDistance::default();

    c.bench_function("composite_distance", |b| {
        b.iter(|| black_box(distance.distance(black_box(&dataset[0]), black_box(&dataset[1]))));
    });
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1000, 5000].iter() {
        let dataset = generate_dataset(*size);
        let pivots = PivotSelector::seeded(&dataset, 16, 42).unwrap();
        group.bench_with_input(BenchmarkId::new("permutation", size), &dataset, |b, dataset| {
            b.iter(|| {
                let mut index = PermutationIndex::new(pivots.clone(), ComponentDistance::default());
                index.build(black_box(dataset));
                black_box(index.len());
            });
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    let dataset = generate_dataset(5000);
    let pivots = PivotSelector::seeded(&dataset, 16, 42).unwrap();
    let mut index = PermutationIndex::new(pivots, ComponentDistance::default());
    index.build(&dataset);
    let query = generate_random_signature(usize::MAX, &mut StdRng::seed_from_u64(7));

    for k in [4, 8, 16].iter() {
        group.bench_with_input(BenchmarkId::new("query_similar", k), k, |b, &k| {
            b.iter(|| black_box(index.query_similar(black_box(&query), k, 10)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_composite_distance, benchmark_build, benchmark_query);
criterion_main!(benches);
