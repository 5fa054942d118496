// ABOUTME: Energy model configuration: Mifflin-St Jeor coefficients, activity factors, goal offsets
// ABOUTME: Configures BMR formula constants, TDEE multipliers, and the calorie target safety floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use fitcoach_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};

/// Energy model configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for maintenance calories
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-specific calorie adjustments
    pub calorie_targets: CalorieTargetConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor non-male constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for maintenance calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
        }
    }
}

/// Upper bound accepted for the deficit, surplus and floor (kcal)
pub const MAX_CALORIE_ADJUSTMENT_KCAL: i64 = 5000;

/// Goal-specific calorie adjustments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieTargetConfig {
    /// Deficit subtracted from maintenance for weight loss (kcal)
    pub weight_loss_deficit_kcal: i64,
    /// Surplus added to maintenance for muscle gain (kcal)
    pub muscle_gain_surplus_kcal: i64,
    /// Safety floor for the weight-loss target (kcal)
    pub min_target_kcal: i64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
        }
    }
}

impl Default for CalorieTargetConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: 500,
            muscle_gain_surplus_kcal: 300,
            min_target_kcal: 1200,
        }
    }
}
