// ABOUTME: Goal-specific weekly training split for the requested number of training days
// ABOUTME: Cycles a fixed session rotation per goal and attaches a one-line summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};

const MUSCLE_GAIN_ROTATION: &[&str] = &[
    "Upper Body (Strength)",
    "Lower Body (Strength)",
    "Rest or Light Cardio",
    "Full Body Strength",
    "Active Recovery / Yoga",
];

const WEIGHT_LOSS_ROTATION: &[&str] = &["Cardio", "Strength", "HIIT", "Rest", "Cardio"];

const GENERAL_FITNESS_ROTATION: &[&str] = &[
    "Strength",
    "Cardio",
    "Mobility / Yoga",
    "Strength",
    "Cardio",
    "Stretching",
];

/// One scheduled training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    /// 1-based day number within the week
    pub day: u8,
    /// Session label
    pub session: String,
}

/// Weekly schedule for a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSplit {
    /// Short description of the split
    pub summary: String,
    /// One entry per training day
    pub days: Vec<TrainingDay>,
}

const fn rotation(goal: FitnessGoal) -> &'static [&'static str] {
    match goal {
        FitnessGoal::MuscleGain => MUSCLE_GAIN_ROTATION,
        FitnessGoal::WeightLoss => WEIGHT_LOSS_ROTATION,
        FitnessGoal::GeneralFitness => GENERAL_FITNESS_ROTATION,
    }
}

/// Build the weekly split for `days_per_week` training days
#[must_use]
pub fn weekly_split(goal: FitnessGoal, days_per_week: u8) -> TrainingSplit {
    let summary = match goal {
        FitnessGoal::MuscleGain => "Upper/lower strength split with recovery days",
        FitnessGoal::WeightLoss => "Alternate cardio, HIIT and strength with a rest day",
        FitnessGoal::GeneralFitness => "Mix of strength, cardio and mobility across the week",
    };

    let sessions = rotation(goal);
    let days = (1..=days_per_week)
        .zip(sessions.iter().cycle())
        .map(|(day, session)| TrainingDay {
            day,
            session: (*session).to_owned(),
        })
        .collect();

    TrainingSplit {
        summary: format!("Train {days_per_week} days/week. {summary}"),
        days,
    }
}
