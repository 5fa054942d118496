// ABOUTME: Splits a daily calorie target into protein, fat and carbohydrate gram targets
// ABOUTME: Protein from body weight, fat as a calorie share, carbs fill the remainder floored at zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach_core::constants::energy_density::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};
use fitcoach_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::config::MacroConfig;

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: i64,
    /// Fat (g)
    pub fat_g: i64,
    /// Carbohydrates (g), never negative
    pub carbs_g: i64,
    /// Calories behind each gram target
    pub calories: MacroCalories,
}

/// Calorie share of each macronutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroCalories {
    /// Protein grams x 4
    pub protein_kcal: f64,
    /// Fat share of the target
    pub fat_kcal: f64,
    /// Remainder after protein and fat, floored at 0
    pub carbs_kcal: f64,
}

/// Split a calorie target into macronutrient gram targets
///
/// - protein = round(`protein_g_per_kg` x weight); protein kcal = grams x 4
/// - fat kcal = `fat_calorie_fraction` x target; fat = round(kcal / 9)
/// - carbs kcal = max(0, target - protein kcal - fat kcal); carbs = round(kcal / 4)
///
/// When protein and fat already exceed the target (low target, heavy body
/// weight) carbs are zero and the split is left unbalanced.
///
/// # Errors
///
/// Returns an error if the target or weight is not positive
pub fn split_macros(
    target_calories: i64,
    weight_kg: f64,
    config: &MacroConfig,
) -> AppResult<MacroTargets> {
    if target_calories <= 0 {
        return Err(AppError::invalid_input("Target calories must be positive"));
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(AppError::invalid_input("Weight must be positive"));
    }

    let target = target_calories as f64;

    let protein_g = (config.protein_g_per_kg * weight_kg).round();
    let protein_kcal = protein_g * PROTEIN_KCAL_PER_G;

    let fat_kcal = config.fat_calorie_fraction * target;
    let fat_g = (fat_kcal / FAT_KCAL_PER_G).round();

    let carbs_kcal = (target - protein_kcal - fat_kcal).max(0.0);
    let carbs_g = (carbs_kcal / CARBS_KCAL_PER_G).round().max(0.0);

    Ok(MacroTargets {
        protein_g: protein_g as i64,
        fat_g: fat_g as i64,
        carbs_g: carbs_g as i64,
        calories: MacroCalories {
            protein_kcal,
            fat_kcal,
            carbs_kcal,
        },
    })
}
