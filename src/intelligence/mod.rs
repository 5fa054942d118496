// ABOUTME: Intelligence module index for energy, nutrition, workout and planning computations
// ABOUTME: Re-exports the engine entry point and the per-component result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure computations behind a recommendation. Each component takes its
//! inputs and configuration explicitly; the only randomness comes from the
//! generator passed in by [`RecommendationEngine`].

/// BMI, BMR, maintenance and goal-adjusted calorie target
pub mod energy_model;
/// Protein, fat and carbohydrate gram targets
pub mod macro_splitter;
/// Daily meal plan with snack top-up
pub mod meal_planner;
/// Orchestration of all components for one request
pub mod recommendation_engine;
/// Request-local random sources
pub mod sampling;
/// Weekly training schedule per goal
pub mod training_split;
/// Goal-based exercise sampling
pub mod workout_selector;

pub use energy_model::{calculate_energy_profile, EnergyProfile};
pub use macro_splitter::{split_macros, MacroCalories, MacroTargets};
pub use meal_planner::{plan_meals, MealPlan};
pub use recommendation_engine::{Recommendation, RecommendationEngine};
pub use sampling::{section_rng, SamplingSection};
pub use training_split::{weekly_split, TrainingDay, TrainingSplit};
pub use workout_selector::{select_workouts, WorkoutSelection};
