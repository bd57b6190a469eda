// Criterion benchmarks for Sri Matrimony

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sri_matrimony::core::{filters::matches_query, QueryEngine};
use sri_matrimony::i18n::{Dictionary, Locale};
use sri_matrimony::models::{Gender, ProfileQuery, ProfileRecord, SortKey};

const LOCATIONS: [&str; 5] = ["Bangalore", "Chennai", "Coimbatore", "Madurai", "Salem"];
const OCCUPATIONS: [&str; 4] = ["Software Engineer", "Teacher", "Nurse", "Business"];

fn create_profile(id: usize) -> ProfileRecord {
    let mut profile = ProfileRecord::new(
        id.to_string(),
        format!("User {}", id),
        21 + (id % 20) as u8,
        if id % 2 == 0 { Gender::Female } else { Gender::Male },
        NaiveDate::from_ymd_opt(2024, 1, 1 + (id % 28) as u32).unwrap(),
    );
    profile.location = LOCATIONS[id % LOCATIONS.len()].to_string();
    profile.occupation = OCCUPATIONS[id % OCCUPATIONS.len()].to_string();
    profile.compatibility = (50 + id % 50) as u8;
    profile.height_cm = Some(150 + (id % 35) as u16);
    profile.religion = Some("Hindu".to_string());
    profile
}

fn create_query() -> ProfileQuery {
    let mut query = ProfileQuery::new()
        .with_search("eng")
        .with_age(21, 35)
        .with_height(150, 180)
        .with_sort(SortKey::Compatibility);
    query.filters.gender = Some("female".to_string());
    query.filters.religion = Some("hindu".to_string());
    query
}

fn bench_resolve(c: &mut Criterion) {
    let dictionary = Dictionary::builtin().unwrap();

    c.bench_function("resolve_present_key", |b| {
        b.iter(|| dictionary.resolve(black_box("advancedSearch"), black_box(Locale::Ta)).len());
    });

    c.bench_function("resolve_missing_key", |b| {
        b.iter(|| dictionary.resolve(black_box("notInCatalog"), black_box(Locale::En)).len());
    });
}

fn bench_query(c: &mut Criterion) {
    let engine = QueryEngine::default();
    let query = create_query();

    let mut group = c.benchmark_group("query");

    for profile_count in [10, 100, 1000, 10000].iter() {
        let records: Vec<ProfileRecord> = (0..*profile_count).map(create_profile).collect();

        group.bench_with_input(
            BenchmarkId::new("query", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| engine.query(black_box(&records), black_box(&query)));
            },
        );
    }

    group.finish();
}

fn bench_filter_stage(c: &mut Criterion) {
    let query = create_query();
    let records: Vec<ProfileRecord> = (0..1000).map(create_profile).collect();

    c.bench_function("filter_stage_1000_profiles", |b| {
        b.iter(|| {
            let count = records
                .iter()
                .filter(|p| matches_query(p, black_box(&query)))
                .count();
            black_box(count)
        });
    });
}

criterion_group!(benches, bench_resolve, bench_query, bench_filter_stage);

criterion_main!(benches);
