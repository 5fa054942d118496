// ABOUTME: Goal-based workout selection from the catalog with a bounded exercise count
// ABOUTME: Filters by goal (falling back to the full catalog) and samples without replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{FitnessGoal, WorkoutEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::config::WorkoutSelectionConfig;

/// Exercises chosen for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSelection {
    /// Sampled exercises, in draw order
    pub exercises: Vec<WorkoutEntry>,
    /// True when no row matched the goal and the whole catalog was used
    pub used_fallback: bool,
}

/// Number of exercises to draw
///
/// The requested day count is clamped to the configured bounds and then
/// capped at what the catalog can supply. Inverted bounds resolve to the
/// maximum.
#[must_use]
pub fn exercise_count(days_per_week: u8, available: usize, config: &WorkoutSelectionConfig) -> usize {
    usize::from(days_per_week)
        .max(config.min_exercises)
        .min(config.max_exercises)
        .min(available)
}

/// Select workouts for a goal
///
/// Rows tagged for `goal` are preferred; if there are none the goal filter is
/// dropped entirely. Rows are drawn without replacement using `rng`.
///
/// # Errors
///
/// Returns `ConfigInvalid` if the exercise bounds are inverted and
/// `EmptyCatalog` if the workout catalog has no rows at all
pub fn select_workouts<R: Rng + ?Sized>(
    catalog: &CatalogStore,
    goal: FitnessGoal,
    days_per_week: u8,
    config: &WorkoutSelectionConfig,
    rng: &mut R,
) -> AppResult<WorkoutSelection> {
    if config.min_exercises > config.max_exercises {
        return Err(AppError::config_invalid(format!(
            "min_exercises {} exceeds max_exercises {}",
            config.min_exercises, config.max_exercises
        )));
    }

    let mut candidates = catalog.workouts_for_goal(goal);
    let used_fallback = candidates.is_empty();
    if used_fallback {
        candidates = catalog.workouts().iter().collect();
    }
    if candidates.is_empty() {
        return Err(AppError::empty_catalog("workout"));
    }

    let count = exercise_count(days_per_week, candidates.len(), config);
    let exercises: Vec<WorkoutEntry> = candidates
        .choose_multiple(rng, count)
        .map(|entry| (*entry).clone())
        .collect();

    debug!(
        goal = %goal,
        days_per_week,
        available = candidates.len(),
        selected = exercises.len(),
        used_fallback,
        "Workouts selected"
    );

    Ok(WorkoutSelection {
        exercises,
        used_fallback,
    })
}
