// ABOUTME: Configuration management module for the recommendation engine
// ABOUTME: Groups energy, macro, selection, sampling and catalog settings with env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for fitcoach
//!
//! - **Energy**: Mifflin-St Jeor coefficients, activity factors, calorie targets
//! - **Planning**: macro ratios, workout bounds, top-up heuristic, sampling, catalog source
//! - **Engine**: the aggregate [`EngineConfig`] with `FITCOACH_*` environment overrides

/// Aggregate configuration, loading and validation
pub mod engine;
/// Energy model configuration
pub mod energy;
/// Configuration error types
pub mod error;
/// Macro, selection, sampling and catalog configuration
pub mod planning;

pub use engine::{env_vars, EngineConfig};
pub use energy::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, EnergyConfig, MAX_CALORIE_ADJUSTMENT_KCAL,
};
pub use error::ConfigError;
pub use planning::{
    CatalogConfig, MacroConfig, MealPlannerConfig, SamplingConfig, WorkoutSelectionConfig,
};
