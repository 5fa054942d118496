// ABOUTME: Energy expenditure calculations using peer-reviewed formulas
// ABOUTME: BMI, Mifflin-St Jeor BMR, activity-scaled maintenance, and goal-adjusted calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! Pure functions turning a [`UserProfile`] into an [`EnergyProfile`].
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use fitcoach_core::constants::profile_limits::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{ActivityLevel, FitnessGoal, Sex, UserProfile};
use serde::{Deserialize, Serialize};

use crate::config::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, EnergyConfig};

/// Derived energy figures for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    /// Body Mass Index (kg/m²)
    pub bmi: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Maintenance calories: BMR × activity factor, rounded (kcal/day)
    pub maintenance_calories: i64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub target_calories: i64,
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female / Other: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidInput` if age, weight or height fall outside the accepted profile ranges
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !(weight_kg > MIN_WEIGHT_KG && weight_kg <= MAX_WEIGHT_KG) {
        return Err(AppError::out_of_range(
            "weight_kg",
            weight_kg,
            &format!("({MIN_WEIGHT_KG}, {MAX_WEIGHT_KG}]"),
        ));
    }
    if !(height_cm > MIN_HEIGHT_CM && height_cm <= MAX_HEIGHT_CM) {
        return Err(AppError::out_of_range(
            "height_cm",
            height_cm,
            &format!("({MIN_HEIGHT_CM}, {MAX_HEIGHT_CM}]"),
        ));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(AppError::out_of_range(
            "age",
            age,
            &format!("[{MIN_AGE}, {MAX_AGE}]"),
        ));
    }

    let sex_constant = if sex.uses_male_formula() {
        config.msj_male_constant
    } else {
        config.msj_female_constant
    };

    Ok(config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age)
        + sex_constant)
}

/// Calculate maintenance calories (TDEE)
///
/// Formula: round(BMR x Activity Factor)
///
/// # Errors
///
/// Returns an error if BMR is not a positive number
pub fn calculate_maintenance_calories(
    bmr: f64,
    activity: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<i64> {
    if !(bmr.is_finite() && bmr > 0.0) {
        return Err(AppError::invalid_input("BMR must be positive"));
    }
    Ok((bmr * config.factor(activity)).round() as i64)
}

/// Goal-adjusted daily calorie target
///
/// - Weight loss: max(floor, maintenance - deficit)
/// - Muscle gain: maintenance + surplus
/// - General fitness: maintenance
///
/// The floor only guards the deficit branch.
///
/// # Errors
///
/// Returns `ConfigInvalid` if the adjustment overflows the calorie range
pub fn calculate_target_calories(
    maintenance_calories: i64,
    goal: FitnessGoal,
    config: &CalorieTargetConfig,
) -> AppResult<i64> {
    let target = match goal {
        FitnessGoal::WeightLoss => maintenance_calories
            .checked_sub(config.weight_loss_deficit_kcal)
            .map(|t| t.max(config.min_target_kcal)),
        FitnessGoal::MuscleGain => {
            maintenance_calories.checked_add(config.muscle_gain_surplus_kcal)
        }
        FitnessGoal::GeneralFitness => Some(maintenance_calories),
    };
    target.ok_or_else(|| {
        AppError::config_invalid(format!(
            "calorie adjustment for {goal} overflows from {maintenance_calories} kcal"
        ))
    })
}

/// Calculate the complete energy profile for a user
///
/// # Errors
///
/// Returns an error if any input fails validation
pub fn calculate_energy_profile(
    profile: &UserProfile,
    config: &EnergyConfig,
) -> AppResult<EnergyProfile> {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg(),
        profile.height_cm(),
        profile.age(),
        profile.sex(),
        &config.bmr,
    )?;
    let maintenance_calories =
        calculate_maintenance_calories(bmr, profile.activity(), &config.activity_factors)?;
    let target_calories =
        calculate_target_calories(maintenance_calories, profile.goal(), &config.calorie_targets)?;

    Ok(EnergyProfile {
        bmi: calculate_bmi(profile.weight_kg(), profile.height_cm()),
        bmr,
        maintenance_calories,
        target_calories,
    })
}
