// ABOUTME: User profile model with closed enums for sex, activity level and fitness goal
// ABOUTME: Validating constructor enforces accepted ranges; string parsing is case-insensitive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::profile_limits::{
    MAX_AGE, MAX_DAYS_PER_WEEK, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_DAYS_PER_WEEK,
    MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};

/// Lowercase and drop separators so "Weight Loss", `weight_loss` and
/// `WeightLoss` compare equal.
fn normalize_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sex as reported by the user
///
/// Mifflin-St Jeor only distinguishes male from non-male, so `Other` uses the
/// non-male constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
    /// Other / not specified (non-male constant)
    Other,
}

impl Sex {
    /// Whether the male BMR constant applies
    #[must_use]
    pub const fn uses_male_formula(&self) -> bool {
        matches!(self, Self::Male)
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!(
                "Unknown sex: '{s}'. Valid options: Male, Female, Other"
            ))),
        }
    }
}

/// Activity level used to scale BMR into maintenance calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
}

impl ActivityLevel {
    /// All levels, in increasing order of activity
    pub const ALL: [Self; 4] = [Self::Sedentary, Self::Light, Self::Moderate, Self::Active];

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Active => "Active",
        }
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            _ => Err(AppError::config(format!(
                "Unknown activity level: '{s}'. Valid options: Sedentary, Light, Moderate, Active"
            ))),
        }
    }
}

/// Fitness goal driving calorie adjustment and catalog filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    MuscleGain,
    /// Maintenance
    GeneralFitness,
}

impl FitnessGoal {
    /// All goals
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::MuscleGain, Self::GeneralFitness];

    /// Display label, as written in the catalog files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::GeneralFitness => "General Fitness",
        }
    }
}

impl Display for FitnessGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "weightloss" => Ok(Self::WeightLoss),
            "musclegain" => Ok(Self::MuscleGain),
            "generalfitness" => Ok(Self::GeneralFitness),
            _ => Err(AppError::config(format!(
                "Unknown fitness goal: '{s}'. Valid options: Weight Loss, Muscle Gain, General Fitness"
            ))),
        }
    }
}

/// Validated biometric profile for a single recommendation request
///
/// Fields are private so a profile can only exist in a validated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    age: u32,
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    activity: ActivityLevel,
    goal: FitnessGoal,
    days_per_week: u8,
}

impl UserProfile {
    /// Build a profile, rejecting any value outside its accepted range
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field and its range
    pub fn new(
        age: u32,
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        activity: ActivityLevel,
        goal: FitnessGoal,
        days_per_week: u8,
    ) -> AppResult<Self> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(AppError::out_of_range(
                "age",
                age,
                &format!("[{MIN_AGE}, {MAX_AGE}]"),
            ));
        }
        // Written as a positive range check so NaN is rejected
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
        if !(MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK).contains(&days_per_week) {
            return Err(AppError::out_of_range(
                "days_per_week",
                days_per_week,
                &format!("[{MIN_DAYS_PER_WEEK}, {MAX_DAYS_PER_WEEK}]"),
            ));
        }

        Ok(Self {
            age,
            sex,
            weight_kg,
            height_cm,
            activity,
            goal,
            days_per_week,
        })
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Reported sex
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Body weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Activity level
    #[must_use]
    pub const fn activity(&self) -> ActivityLevel {
        self.activity
    }

    /// Fitness goal
    #[must_use]
    pub const fn goal(&self) -> FitnessGoal {
        self.goal
    }

    /// Requested training days per week
    #[must_use]
    pub const fn days_per_week(&self) -> u8 {
        self.days_per_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn profile(age: u32, weight: f64, height: f64, days: u8) -> AppResult<UserProfile> {
        UserProfile::new(
            age,
            Sex::Male,
            weight,
            height,
            ActivityLevel::Moderate,
            FitnessGoal::GeneralFitness,
            days,
        )
    }

    #[test]
    fn test_goal_parsing_accepts_common_spellings() {
        for raw in ["Weight Loss", "weight_loss", "WEIGHTLOSS", " weight-loss "] {
            assert_eq!(raw.parse::<FitnessGoal>().unwrap(), FitnessGoal::WeightLoss);
        }
        assert_eq!(
            "muscle gain".parse::<FitnessGoal>().unwrap(),
            FitnessGoal::MuscleGain
        );
    }

    #[test]
    fn test_unknown_goal_and_activity_are_config_errors() {
        let goal_err = "bulking".parse::<FitnessGoal>().unwrap_err();
        assert_eq!(goal_err.code, ErrorCode::ConfigError);

        let activity_err = "extreme".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(activity_err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_unknown_sex_is_invalid_input() {
        let err = "unknown".parse::<Sex>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(!"Other".parse::<Sex>().unwrap().uses_male_formula());
    }

    #[test]
    fn test_profile_bounds() {
        assert!(profile(12, 30.5, 120.5, 1).is_ok());
        assert!(profile(90, 200.0, 230.0, 7).is_ok());

        assert_eq!(
            profile(11, 70.0, 175.0, 4).unwrap_err().code,
            ErrorCode::InvalidInput
        );
        // Lower weight and height bounds are exclusive
        assert!(profile(25, 30.0, 175.0, 4).is_err());
        assert!(profile(25, 70.0, 120.0, 4).is_err());
        assert!(profile(25, f64::NAN, 175.0, 4).is_err());
        assert!(profile(25, 70.0, 175.0, 0).is_err());
        assert!(profile(25, 70.0, 175.0, 8).is_err());
    }
}
