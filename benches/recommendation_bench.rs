// ABOUTME: Criterion benchmarks for the recommendation pipeline
// ABOUTME: Measures catalog parsing, meal planning, and full request-to-response latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recommendation engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitcoach::catalog::CatalogStore;
use fitcoach::config::{EngineConfig, MealPlannerConfig, SamplingConfig};
use fitcoach::intelligence::meal_planner::plan_meals;
use fitcoach::intelligence::RecommendationEngine;
use fitcoach::models::{FitnessGoal, RecommendationRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn request(goal: &str) -> RecommendationRequest {
    RecommendationRequest {
        age: 32,
        sex: "Female".into(),
        weight_kg: 64.0,
        height_cm: 168.0,
        activity: "Active".into(),
        goal: goal.into(),
        days_per_week: 5,
    }
}

/// Benchmark parsing the embedded CSV catalog
fn bench_catalog_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    group.bench_function("embedded", |b| {
        b.iter(|| black_box(CatalogStore::embedded().unwrap()));
    });
    group.finish();
}

/// Benchmark the meal planner at targets that need 0 to 5 top-up snacks
fn bench_meal_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("meal_plan");
    let catalog = CatalogStore::embedded().unwrap();
    let config = MealPlannerConfig::default();

    for target in [1500_i64, 2500, 4000, 10_000] {
        group.bench_with_input(BenchmarkId::new("target", target), &target, |b, &target| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                black_box(
                    plan_meals(&catalog, FitnessGoal::MuscleGain, target, &config, &mut rng)
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

/// Benchmark the full request pipeline in reproducible and random modes
fn bench_full_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let catalog = CatalogStore::embedded().unwrap();
    let requests = [
        request("Weight Loss"),
        request("Muscle Gain"),
        request("General Fitness"),
    ];
    group.throughput(Throughput::Elements(requests.len() as u64));

    for reproducible in [true, false] {
        let config = EngineConfig {
            sampling: SamplingConfig {
                reproducible,
                seed: 0,
            },
            ..EngineConfig::default()
        };
        let engine = RecommendationEngine::new(&config, &catalog);
        let label = if reproducible { "reproducible" } else { "random" };

        group.bench_function(label, |b| {
            b.iter(|| {
                for req in &requests {
                    black_box(engine.recommend_request(req).unwrap());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_load,
    bench_meal_plan,
    bench_full_recommendation
);
criterion_main!(benches);
