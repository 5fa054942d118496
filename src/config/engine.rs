// ABOUTME: Top-level engine configuration with environment overrides and validation
// ABOUTME: Loads defaults, applies FITCOACH_* variables, and rejects inconsistent settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::energy::{EnergyConfig, MAX_CALORIE_ADJUSTMENT_KCAL};
use super::error::ConfigError;
use super::planning::{
    CatalogConfig, MacroConfig, MealPlannerConfig, SamplingConfig, WorkoutSelectionConfig,
};

/// Environment variable names recognised by [`EngineConfig::load`]
pub mod env_vars {
    /// Catalog directory
    pub const DATA_DIR: &str = "FITCOACH_DATA_DIR";
    /// `true`/`false` reproducible sampling
    pub const REPRODUCIBLE: &str = "FITCOACH_REPRODUCIBLE";
    /// Seed salt
    pub const SEED: &str = "FITCOACH_SEED";
    /// Top-up tolerance in kcal
    pub const TOPUP_TOLERANCE_KCAL: &str = "FITCOACH_TOPUP_TOLERANCE_KCAL";
    /// Top-up iteration bound
    pub const MAX_TOPUP_ITERATIONS: &str = "FITCOACH_MAX_TOPUP_ITERATIONS";
    /// Minimum exercises
    pub const MIN_WORKOUTS: &str = "FITCOACH_MIN_WORKOUTS";
    /// Maximum exercises
    pub const MAX_WORKOUTS: &str = "FITCOACH_MAX_WORKOUTS";
    /// Weight-loss deficit in kcal
    pub const WEIGHT_LOSS_DEFICIT: &str = "FITCOACH_WEIGHT_LOSS_DEFICIT";
    /// Muscle-gain surplus in kcal
    pub const MUSCLE_GAIN_SURPLUS: &str = "FITCOACH_MUSCLE_GAIN_SURPLUS";
    /// Weight-loss calorie floor in kcal
    pub const MIN_TARGET_CALORIES: &str = "FITCOACH_MIN_TARGET_CALORIES";
}

/// Complete engine configuration
///
/// Constructed once at startup and passed by reference into the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// BMR, activity factors, calorie targets
    pub energy: EnergyConfig,
    /// Macro split ratios
    pub macros: MacroConfig,
    /// Workout selection bounds
    pub workouts: WorkoutSelectionConfig,
    /// Meal planner top-up limits
    pub meal_planner: MealPlannerConfig,
    /// Random source configuration
    pub sampling: SamplingConfig,
    /// Catalog source
    pub catalog: CatalogConfig,
}

fn parse_override<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{raw}'")))
        })
        .transpose()
}

impl EngineConfig {
    /// Load configuration from defaults and the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| env::var(name).ok())
    }

    /// Load configuration using `lookup` in place of the process environment
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::load`]
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self::default().apply_overrides(&lookup)?;
        config.validate()?;
        debug!(?config, "Engine configuration loaded");
        Ok(config)
    }

    fn apply_overrides(
        mut self,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(dir) = lookup(env_vars::DATA_DIR).filter(|d| !d.trim().is_empty()) {
            self.catalog.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(val) = parse_override(lookup, env_vars::REPRODUCIBLE)? {
            self.sampling.reproducible = val;
        }
        if let Some(val) = parse_override(lookup, env_vars::SEED)? {
            self.sampling.seed = val;
        }
        if let Some(val) = parse_override(lookup, env_vars::TOPUP_TOLERANCE_KCAL)? {
            self.meal_planner.topup_tolerance_kcal = val;
        }
        if let Some(val) = parse_override(lookup, env_vars::MAX_TOPUP_ITERATIONS)? {
            self.meal_planner.max_topup_iterations = val;
        }
        if let Some(val) = parse_override(lookup, env_vars::MIN_WORKOUTS)? {
            self.workouts.min_exercises = val;
        }
        if let Some(val) = parse_override(lookup, env_vars::MAX_WORKOUTS)? {
            self.workouts.max_exercises = val;
        }
        let targets = &mut self.energy.calorie_targets;
        if let Some(val) = parse_override(lookup, env_vars::WEIGHT_LOSS_DEFICIT)? {
            targets.weight_loss_deficit_kcal = val;
        }
        if let Some(val) = parse_override(lookup, env_vars::MUSCLE_GAIN_SURPLUS)? {
            targets.muscle_gain_surplus_kcal = val;
        }
        if let Some(val) = parse_override(lookup, env_vars::MIN_TARGET_CALORIES)? {
            targets.min_target_kcal = val;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.energy.activity_factors;
        if [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
        ]
        .iter()
        .any(|f| !(f.is_finite() && *f > 0.0))
        {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be positive",
            ));
        }

        let targets = &self.energy.calorie_targets;
        let adjustment = 0..=MAX_CALORIE_ADJUSTMENT_KCAL;
        if !adjustment.contains(&targets.weight_loss_deficit_kcal)
            || !adjustment.contains(&targets.muscle_gain_surplus_kcal)
        {
            return Err(ConfigError::ValueOutOfRange(
                "calorie deficit and surplus must be between 0 and 5000 kcal",
            ));
        }
        if !(1..=MAX_CALORIE_ADJUSTMENT_KCAL).contains(&targets.min_target_kcal) {
            return Err(ConfigError::ValueOutOfRange(
                "minimum target calories must be between 1 and 5000 kcal",
            ));
        }

        if !(self.macros.protein_g_per_kg > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein_g_per_kg must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.macros.fat_calorie_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_calorie_fraction must be between 0 and 1",
            ));
        }

        if self.workouts.min_exercises == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_exercises must be at least 1",
            ));
        }
        if self.workouts.min_exercises > self.workouts.max_exercises {
            return Err(ConfigError::InvalidRange(
                "min_exercises must be <= max_exercises",
            ));
        }

        let tolerance = self.meal_planner.topup_tolerance_kcal;
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "topup_tolerance_kcal must be a non-negative number",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::load_with(lookup_from(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!((config.meal_planner.topup_tolerance_kcal - 300.0).abs() < f64::EPSILON);
        assert_eq!(config.meal_planner.max_topup_iterations, 5);
        assert!(config.sampling.reproducible);
    }

    #[test]
    fn test_overrides_applied() {
        let config = EngineConfig::load_with(lookup_from(&[
            (env_vars::TOPUP_TOLERANCE_KCAL, "150"),
            (env_vars::MAX_TOPUP_ITERATIONS, "2"),
            (env_vars::REPRODUCIBLE, "false"),
            (env_vars::SEED, "42"),
            (env_vars::DATA_DIR, "/srv/catalog"),
        ]))
        .unwrap();

        assert!((config.meal_planner.topup_tolerance_kcal - 150.0).abs() < f64::EPSILON);
        assert_eq!(config.meal_planner.max_topup_iterations, 2);
        assert!(!config.sampling.reproducible);
        assert_eq!(config.sampling.seed, 42);
        assert_eq!(config.catalog.data_dir, Some(PathBuf::from("/srv/catalog")));
    }

    #[test]
    fn test_unparsable_override_rejected() {
        let err = EngineConfig::load_with(lookup_from(&[(env_vars::SEED, "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("FITCOACH_SEED")));
    }

    #[test]
    fn test_inverted_workout_bounds_rejected() {
        let err = EngineConfig::load_with(lookup_from(&[
            (env_vars::MIN_WORKOUTS, "7"),
            (env_vars::MAX_WORKOUTS, "3"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_calorie_adjustments_bounded() {
        for (name, value) in [
            (env_vars::MUSCLE_GAIN_SURPLUS, "9223372036854775807"),
            (env_vars::WEIGHT_LOSS_DEFICIT, "5001"),
            (env_vars::MIN_TARGET_CALORIES, "0"),
        ] {
            let err = EngineConfig::load_with(lookup_from(&[(name, value)])).unwrap_err();
            assert!(matches!(err, ConfigError::ValueOutOfRange(_)), "{name}={value}");
        }
        let config =
            EngineConfig::load_with(lookup_from(&[(env_vars::MUSCLE_GAIN_SURPLUS, "5000")]))
                .unwrap();
        assert_eq!(config.energy.calorie_targets.muscle_gain_surplus_kcal, 5000);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = EngineConfig::load_with(lookup_from(&[(env_vars::TOPUP_TOLERANCE_KCAL, "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    }
}
