// ABOUTME: Macro split, workout selection, meal planner, and sampling configuration
// ABOUTME: Holds the selection bounds and top-up heuristic limits with their default values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Macro split configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroConfig {
    /// Protein target per kg of body weight (1.6 g/kg)
    pub protein_g_per_kg: f64,
    /// Share of target calories allocated to fat (0.25)
    pub fat_calorie_fraction: f64,
}

/// Workout selection bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSelectionConfig {
    /// Fewest exercises suggested, even for 1-2 training days
    pub min_exercises: usize,
    /// Most exercises suggested, even for 7 training days
    pub max_exercises: usize,
}

/// Meal planner top-up heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlannerConfig {
    /// Top-up stops once the plan is within this many kcal below target
    pub topup_tolerance_kcal: f64,
    /// Upper bound on snacks added by the top-up loop
    pub max_topup_iterations: u32,
}

/// Random source configuration for catalog sampling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Derive seeds from request inputs so identical requests give identical plans
    pub reproducible: bool,
    /// Salt mixed into every derived seed
    pub seed: u64,
}

/// Catalog source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding `workouts.csv` and `nutrition.csv`; embedded data when unset
    pub data_dir: Option<PathBuf>,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 1.6,
            fat_calorie_fraction: 0.25,
        }
    }
}

impl Default for WorkoutSelectionConfig {
    fn default() -> Self {
        Self {
            min_exercises: 3,
            max_exercises: 6,
        }
    }
}

impl Default for MealPlannerConfig {
    fn default() -> Self {
        Self {
            topup_tolerance_kcal: 300.0,
            max_topup_iterations: 5,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            reproducible: true,
            seed: 0,
        }
    }
}
