//! Benchmarks for the ranking path
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic catalog a few pages larger than a real request sees.

use catalog::{CatalogEntry, UserPreferences};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{find_similar_entries, generate_recommendations};

const CATEGORIES: &[&str] = &["action", "adventure", "rpg", "indie", "shooter", "racing"];
const TAGS: &[&str] = &["singleplayer", "multiplayer", "horror", "open-world", "co-op"];

fn synthetic_catalog(size: u32) -> Vec<CatalogEntry> {
    (0..size)
        .map(|i| {
            let c = i as usize;
            CatalogEntry::new(i, format!("Game {i}"))
                .with_categories([CATEGORIES[c % 6], CATEGORIES[(c / 6) % 6]])
                .with_platforms(["playstation5"])
                .with_tags([TAGS[c % 5]])
                .with_rating((i % 50) as f32 / 10.0, i * 7 % 400)
                .with_metacritic(if i % 4 == 0 { None } else { Some((i * 13 % 101) as u8) })
                .with_playtime((i % 90) as f32)
        })
        .collect()
}

fn bench_generate_recommendations(c: &mut Criterion) {
    let catalog = synthetic_catalog(200);
    let prefs = UserPreferences::new(60.0)
        .with_categories(["action", "rpg"])
        .with_platforms(["playstation5"])
        .with_min_score(Some(60))
        .with_excluded_tags(["horror"]);

    c.bench_function("generate_recommendations", |b| {
        b.iter(|| {
            let recs = generate_recommendations(black_box(&catalog), black_box(&prefs), 20);
            black_box(recs)
        })
    });
}

fn bench_find_similar_entries(c: &mut Criterion) {
    let catalog = synthetic_catalog(200);
    let reference = catalog[17].clone();

    c.bench_function("find_similar_entries", |b| {
        b.iter(|| {
            let similar = find_similar_entries(black_box(&reference), black_box(&catalog), 10);
            black_box(similar)
        })
    });
}

criterion_group!(
    benches,
    bench_generate_recommendations,
    bench_find_similar_entries
);
criterion_main!(benches);
