// Criterion benchmarks for Hypely Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hypely_match::core::{category_match, parse_follower_requirement, Matcher};
use hypely_match::models::{Gig, GigStatus, InfluencerProfile};

fn create_influencer(id: usize) -> InfluencerProfile {
    let categories = if id % 3 == 0 {
        vec!["Fitness".to_string(), "Wellness".to_string()]
    } else if id % 3 == 1 {
        vec!["Beauty".to_string(), "Fashion".to_string()]
    } else {
        vec!["Travel".to_string()]
    };

    InfluencerProfile {
        id: id.to_string(),
        name: format!("Creator {}", id),
        categories,
        followers: 10_000 + (id as u64 * 3_700) % 400_000,
        engagement_rate: 1.0 + (id % 9) as f64,
        rate_per_post: 500.0 + (id % 40) as f64 * 100.0,
        location: if id % 2 == 0 {
            "Los Angeles, CA".to_string()
        } else {
            "London, UK".to_string()
        },
    }
}

fn create_gig() -> Gig {
    Gig {
        id: "bench_gig".to_string(),
        title: "Spring activewear campaign".to_string(),
        categories: vec!["Fitness".to_string()],
        requirements: vec!["High-quality photo content".to_string(), "50k+ followers".to_string()],
        price: 3000.0,
        location: Some("Los Angeles, CA".to_string()),
        status: GigStatus::Open,
    }
}

fn bench_category_match(c: &mut Criterion) {
    let subject = vec!["Fitness".to_string(), "Wellness".to_string()];
    let target = vec!["Fitness & Wellness".to_string(), "Lifestyle".to_string()];

    c.bench_function("category_match", |b| {
        b.iter(|| category_match(black_box(&subject), black_box(&target)));
    });
}

fn bench_requirement_parsing(c: &mut Criterion) {
    let requirements = vec![
        "High-quality photo content".to_string(),
        "Weekly posting cadence".to_string(),
        "50k+ followers".to_string(),
    ];

    c.bench_function("parse_follower_requirement", |b| {
        b.iter(|| parse_follower_requirement(black_box(&requirements)));
    });
}

fn bench_score_pair(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let influencer = create_influencer(0);
    let gig = create_gig();

    c.bench_function("score_pair", |b| {
        b.iter(|| matcher.score_pair(black_box(&influencer), black_box(&gig)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let gig = create_gig();

    let mut group = c.benchmark_group("ranking");

    for pool_size in [10, 50, 100, 500, 1000].iter() {
        let pool: Vec<InfluencerProfile> = (0..*pool_size).map(create_influencer).collect();

        group.bench_with_input(
            BenchmarkId::new("find_best_influencers_for_gig", pool_size),
            pool_size,
            |b, _| {
                b.iter(|| {
                    matcher.find_best_influencers_for_gig(
                        black_box(&pool),
                        black_box(&gig),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_category_match,
    bench_requirement_parsing,
    bench_score_pair,
    bench_ranking
);
criterion_main!(benches);
