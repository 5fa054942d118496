// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, sample profiles and small in-memory catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitcoach`

use std::sync::Once;

use fitcoach::catalog::CatalogStore;
use fitcoach::models::{
    ActivityLevel, FitnessGoal, MealEntry, MealType, RecommendationRequest, Sex, UserProfile,
    WorkoutEntry,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 25-year-old moderately active male, 70 kg / 175 cm
pub fn reference_profile(goal: FitnessGoal) -> UserProfile {
    UserProfile::new(25, Sex::Male, 70.0, 175.0, ActivityLevel::Moderate, goal, 4).unwrap()
}

/// Raw request matching [`reference_profile`]
pub fn reference_request(goal: &str) -> RecommendationRequest {
    RecommendationRequest {
        age: 25,
        sex: "Male".to_owned(),
        weight_kg: 70.0,
        height_cm: 175.0,
        activity: "Moderate".to_owned(),
        goal: goal.to_owned(),
        days_per_week: 4,
    }
}

pub fn workout(name: &str, goal: FitnessGoal) -> WorkoutEntry {
    WorkoutEntry {
        exercise: name.to_owned(),
        category: "Strength".to_owned(),
        duration_mins: 20.0,
        reps_or_time: "3 x 10".to_owned(),
        description: format!("{name} test row"),
        target_goal: goal,
    }
}

pub fn meal(slot: MealType, name: &str, calories: f64, goal: FitnessGoal) -> MealEntry {
    MealEntry {
        meal_type: slot,
        meal_name: name.to_owned(),
        calories,
        protein_g: 20.0,
        carbs_g: 30.0,
        fats_g: 10.0,
        items: "test".to_owned(),
        target_goal: goal,
    }
}

/// Catalog whose rows are all tagged with `goal`
pub fn single_goal_catalog(goal: FitnessGoal, workouts: usize) -> CatalogStore {
    let workouts = (0..workouts)
        .map(|i| workout(&format!("Exercise {i}"), goal))
        .collect();
    let meals = vec![
        meal(MealType::Breakfast, "Oats", 400.0, goal),
        meal(MealType::Lunch, "Chicken Rice", 650.0, goal),
        meal(MealType::Snack, "Yogurt", 200.0, goal),
        meal(MealType::Snack, "Trail Mix", 300.0, goal),
        meal(MealType::Dinner, "Salmon", 700.0, goal),
    ];
    CatalogStore::new(workouts, meals)
}

/// Default catalog bundled with the crate
pub fn embedded_catalog() -> CatalogStore {
    CatalogStore::embedded().unwrap()
}
