// ABOUTME: Read-only catalog records for workouts and meals
// ABOUTME: Defines WorkoutEntry, MealEntry and the fixed MealType slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::profile::FitnessGoal;
use crate::errors::AppError;

/// Meal slot within a daily plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Between-meal snack (also used for calorie top-ups)
    Snack,
    /// Evening meal
    Dinner,
}

impl MealType {
    /// Slots in the order a daily plan is assembled
    pub const PLAN_ORDER: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" => Ok(Self::Snack),
            "dinner" => Ok(Self::Dinner),
            _ => Err(AppError::invalid_input(format!(
                "Unknown meal type: '{s}'. Valid options: Breakfast, Lunch, Snack, Dinner"
            ))),
        }
    }
}

/// Exercise record from the workout catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Exercise name
    pub exercise: String,
    /// Category (Cardio, Strength, HIIT, Mobility, ...)
    pub category: String,
    /// Session duration in minutes
    pub duration_mins: f64,
    /// Prescription, e.g. "3x12" or "20 min"
    pub reps_or_time: String,
    /// Short description
    pub description: String,
    /// Goal this exercise is tagged for
    pub target_goal: FitnessGoal,
}

/// Meal record from the nutrition catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Slot this meal fills
    pub meal_type: MealType,
    /// Meal name
    pub meal_name: String,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fats in grams
    pub fats_g: f64,
    /// Ingredient list as free text
    pub items: String,
    /// Goal this meal is tagged for
    pub target_goal: FitnessGoal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_parsing_is_case_insensitive() {
        assert_eq!("breakfast".parse::<MealType>().unwrap(), MealType::Breakfast);
        assert_eq!(" DINNER ".parse::<MealType>().unwrap(), MealType::Dinner);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_plan_order() {
        assert_eq!(
            MealType::PLAN_ORDER,
            [
                MealType::Breakfast,
                MealType::Lunch,
                MealType::Snack,
                MealType::Dinner
            ]
        );
    }
}
