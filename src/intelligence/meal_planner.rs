// ABOUTME: Daily meal plan assembly: one meal per slot plus a bounded snack top-up loop
// ABOUTME: Falls back from goal-specific to goal-agnostic rows per slot and never trims excess calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Planner
//!
//! Builds a plan in two phases:
//!
//! 1. **Slots** - for Breakfast, Lunch, Snack and Dinner (in that order) one
//!    meal is drawn from the goal's rows for the slot, or from any goal's rows
//!    for the slot when the goal has none. A slot with no rows at all is left
//!    out of the plan.
//! 2. **Top-up** - while the running total is more than the configured
//!    tolerance below target, extra snacks are drawn from the goal's snack
//!    rows, up to a fixed number of iterations. Snacks may repeat. The plan is
//!    approximate: overshoot is kept as-is.

use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{FitnessGoal, MealEntry, MealType};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::config::MealPlannerConfig;

/// Daily meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Slot meals in plan order, followed by top-up snacks
    pub entries: Vec<MealEntry>,
    /// Sum of entry calories, rounded (kcal)
    pub total_calories: i64,
    /// Number of snacks added by the top-up loop
    pub topup_iterations: u32,
    /// Slots for which the catalog had no rows
    pub missing_slots: Vec<MealType>,
    /// True when no row matched the goal and the whole catalog was used
    pub used_fallback: bool,
}

/// Draw one meal for `slot`, preferring the goal pool
fn fill_slot<'a, R: Rng + ?Sized>(
    catalog: &'a CatalogStore,
    goal_pool: &[&'a MealEntry],
    slot: MealType,
    rng: &mut R,
) -> Option<&'a MealEntry> {
    let goal_candidates: Vec<&MealEntry> = goal_pool
        .iter()
        .copied()
        .filter(|m| m.meal_type == slot)
        .collect();
    let candidates = if goal_candidates.is_empty() {
        catalog.meals_matching(None, Some(slot))
    } else {
        goal_candidates
    };
    candidates.choose(rng).copied()
}

/// Assemble a meal plan approaching `target_calories`
///
/// # Errors
///
/// Returns `EmptyCatalog` if no slot could be filled
pub fn plan_meals<R: Rng + ?Sized>(
    catalog: &CatalogStore,
    goal: FitnessGoal,
    target_calories: i64,
    config: &MealPlannerConfig,
    rng: &mut R,
) -> AppResult<MealPlan> {
    let mut goal_pool = catalog.meals_matching(Some(goal), None);
    let used_fallback = goal_pool.is_empty();
    if used_fallback {
        goal_pool = catalog.meals().iter().collect();
    }

    let mut entries = Vec::with_capacity(MealType::PLAN_ORDER.len());
    let mut missing_slots = Vec::new();
    for slot in MealType::PLAN_ORDER {
        match fill_slot(catalog, &goal_pool, slot, rng) {
            Some(meal) => entries.push(meal.clone()),
            None => missing_slots.push(slot),
        }
    }
    if entries.is_empty() {
        return Err(AppError::empty_catalog("meal"));
    }

    let mut total: f64 = entries.iter().map(|m| m.calories).sum();

    let snack_pool: Vec<&MealEntry> = goal_pool
        .iter()
        .copied()
        .filter(|m| m.meal_type == MealType::Snack)
        .collect();
    let threshold = target_calories as f64 - config.topup_tolerance_kcal;
    let mut topup_iterations = 0;
    while total < threshold && topup_iterations < config.max_topup_iterations {
        let Some(snack) = snack_pool.choose(rng) else {
            break;
        };
        total += snack.calories;
        entries.push((*snack).clone());
        topup_iterations += 1;
        debug!(
            snack = %snack.meal_name,
            running_total = total,
            iteration = topup_iterations,
            "Top-up snack added"
        );
    }

    debug!(
        goal = %goal,
        target_calories,
        total_calories = total,
        topup_iterations,
        missing_slots = missing_slots.len(),
        used_fallback,
        "Meal plan assembled"
    );

    Ok(MealPlan {
        entries,
        total_calories: total.round() as i64,
        topup_iterations,
        missing_slots,
        used_fallback,
    })
}
