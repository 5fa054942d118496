// ABOUTME: Request and response models exchanged with the presentation layer
// ABOUTME: Converts raw request strings into a validated UserProfile and flattens results for output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request / Response Models
//!
//! The engine works on typed values ([`UserProfile`],
//! [`Recommendation`](crate::intelligence::recommendation_engine::Recommendation)).
//! These types are the boundary with callers: a [`RecommendationRequest`] carries
//! the raw fields a form would submit, and a [`RecommendationResponse`] is the
//! flat record a page renders.

use fitcoach_core::constants::profile_limits::DEFAULT_DAYS_PER_WEEK;
use fitcoach_core::errors::{AppError, ErrorResponseDetails};
use serde::{Deserialize, Serialize};

pub use fitcoach_core::models::{
    ActivityLevel, FitnessGoal, MealEntry, MealType, Sex, UserProfile, WorkoutEntry,
};

use crate::intelligence::training_split::TrainingSplit;

const fn default_days_per_week() -> u8 {
    DEFAULT_DAYS_PER_WEEK
}

/// Raw recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Age in years
    pub age: u32,
    /// "Male", "Female" or "Other"
    pub sex: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// "Sedentary", "Light", "Moderate" or "Active"
    pub activity: String,
    /// "Weight Loss", "Muscle Gain" or "General Fitness"
    pub goal: String,
    /// Training days per week, 4 when omitted
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u8,
}

impl TryFrom<&RecommendationRequest> for UserProfile {
    type Error = AppError;

    fn try_from(request: &RecommendationRequest) -> Result<Self, Self::Error> {
        let sex: Sex = request.sex.parse()?;
        let activity: ActivityLevel = request.activity.parse()?;
        let goal: FitnessGoal = request.goal.parse()?;
        Self::new(
            request.age,
            sex,
            request.weight_kg,
            request.height_cm,
            activity,
            goal,
            request.days_per_week,
        )
    }
}

/// Failure of one independently computed section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionError {
    /// "workouts" or "meals"
    pub section: String,
    /// Error code and message
    pub error: ErrorResponseDetails,
}

/// Flat recommendation record for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Body Mass Index
    pub bmi: f64,
    /// Basal Metabolic Rate, rounded (kcal/day)
    pub bmr: i64,
    /// Maintenance calories (kcal/day)
    pub maintenance_calories: i64,
    /// Goal-adjusted target (kcal/day)
    pub target_calories: i64,
    /// Protein target (g)
    pub protein_g: i64,
    /// Carbohydrate target (g)
    pub carbs_g: i64,
    /// Fat target (g)
    pub fat_g: i64,
    /// Selected exercises; empty if the workout section failed
    pub workouts: Vec<WorkoutEntry>,
    /// Planned meals; empty if the meal section failed
    pub meals: Vec<MealEntry>,
    /// Sum of planned meal calories
    pub total_meal_calories: i64,
    /// Weekly training schedule
    pub training_split: TrainingSplit,
    /// Sections that could not be computed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<SectionError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcoach_core::errors::ErrorCode;

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            age: 25,
            sex: "Male".to_owned(),
            weight_kg: 70.0,
            height_cm: 175.0,
            activity: "Moderate".to_owned(),
            goal: "Muscle Gain".to_owned(),
            days_per_week: 4,
        }
    }

    #[test]
    fn test_days_per_week_defaults_to_four() {
        let json = r#"{"age":30,"sex":"female","weight_kg":60.0,"height_cm":165.0,
                       "activity":"light","goal":"weight loss"}"#;
        let request: RecommendationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.days_per_week, 4);
        let profile = UserProfile::try_from(&request).unwrap();
        assert_eq!(profile.goal(), FitnessGoal::WeightLoss);
        assert_eq!(profile.sex(), Sex::Female);
    }

    #[test]
    fn test_error_classes_by_field() {
        let mut bad_sex = request();
        bad_sex.sex = "robot".to_owned();
        assert_eq!(
            UserProfile::try_from(&bad_sex).unwrap_err().code,
            ErrorCode::InvalidInput
        );

        let mut bad_activity = request();
        bad_activity.activity = "couch".to_owned();
        assert_eq!(
            UserProfile::try_from(&bad_activity).unwrap_err().code,
            ErrorCode::ConfigError
        );

        let mut bad_age = request();
        bad_age.age = 95;
        assert_eq!(
            UserProfile::try_from(&bad_age).unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }
}
