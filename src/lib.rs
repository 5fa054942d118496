// ABOUTME: Main library entry point for the fitcoach recommendation engine
// ABOUTME: Turns a user profile into calorie targets, macros, workouts, meals and a weekly split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitcoach
//!
//! A synchronous recommendation engine for fitness and nutrition planning.
//! Given a validated user profile it computes:
//!
//! - **Energy**: BMI, Mifflin-St Jeor BMR, maintenance and goal-adjusted target calories
//! - **Macros**: protein, fat and carbohydrate gram targets
//! - **Workouts**: goal-matched exercises sampled from a CSV catalog
//! - **Meals**: one meal per slot plus a bounded snack top-up
//! - **Training split**: a weekly session schedule for the goal
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitcoach::catalog::CatalogStore;
//! use fitcoach::config::EngineConfig;
//! use fitcoach::intelligence::RecommendationEngine;
//! use fitcoach::models::RecommendationRequest;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = EngineConfig::load()?;
//!     let catalog = CatalogStore::from_config(&config.catalog)?;
//!     let engine = RecommendationEngine::new(&config, &catalog);
//!
//!     let request = RecommendationRequest {
//!         age: 25,
//!         sex: "Male".into(),
//!         weight_kg: 70.0,
//!         height_cm: 175.0,
//!         activity: "Moderate".into(),
//!         goal: "Muscle Gain".into(),
//!         days_per_week: 4,
//!     };
//!     let response = engine.recommend_request(&request)?;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```

/// Immutable workout and meal catalog
pub mod catalog;

/// Engine configuration with environment overrides
pub mod config;

/// Energy, macro, workout, meal and training split computations
pub mod intelligence;

/// Tracing subscriber setup
pub mod logging;

/// Request and response records
pub mod models;

/// Error types shared across the workspace
pub mod errors {
    pub use fitcoach_core::errors::*;
}

/// Domain constants
pub mod constants {
    pub use fitcoach_core::constants::*;
}
