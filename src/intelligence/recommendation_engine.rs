// ABOUTME: Assembles a full recommendation from energy, macros, workouts, meals and training split
// ABOUTME: Energy and macros fail fast; workouts and meals fail independently as per-section errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Engine
//!
//! Orchestrates the intelligence modules for one [`UserProfile`]:
//!
//! 1. [`calculate_energy_profile`] and [`split_macros`] - any error aborts the request
//! 2. [`select_workouts`] and [`plan_meals`] - each draws from its own
//!    request-local random source and a failure is kept on its section
//! 3. [`weekly_split`] - always succeeds
//!
//! The engine borrows its configuration and catalog, so one [`CatalogStore`]
//! can serve any number of threads without locking.

use fitcoach_core::errors::{AppError, AppResult, ErrorResponseDetails};
use fitcoach_core::models::UserProfile;
use tracing::{info, warn};

use super::energy_model::{calculate_energy_profile, EnergyProfile};
use super::macro_splitter::{split_macros, MacroTargets};
use super::meal_planner::{plan_meals, MealPlan};
use super::sampling::{section_rng, SamplingSection};
use super::training_split::{weekly_split, TrainingSplit};
use super::workout_selector::{select_workouts, WorkoutSelection};
use crate::catalog::CatalogStore;
use crate::config::EngineConfig;
use crate::models::{RecommendationRequest, RecommendationResponse, SectionError};

/// Complete recommendation for one profile
#[derive(Debug)]
pub struct Recommendation {
    /// Validated input profile
    pub profile: UserProfile,
    /// BMI, BMR, maintenance and target calories
    pub energy: EnergyProfile,
    /// Macronutrient gram targets
    pub macros: MacroTargets,
    /// Workout section or its failure
    pub workouts: Result<WorkoutSelection, AppError>,
    /// Meal plan section or its failure
    pub meals: Result<MealPlan, AppError>,
    /// Weekly training schedule
    pub training_split: TrainingSplit,
}

impl Recommendation {
    /// Flatten into the response record
    #[must_use]
    pub fn to_response(&self) -> RecommendationResponse {
        let mut errors = Vec::new();

        let workouts = match &self.workouts {
            Ok(selection) => selection.exercises.clone(),
            Err(e) => {
                errors.push(section_error("workouts", e));
                Vec::new()
            }
        };
        let (meals, total_meal_calories) = match &self.meals {
            Ok(plan) => (plan.entries.clone(), plan.total_calories),
            Err(e) => {
                errors.push(section_error("meals", e));
                (Vec::new(), 0)
            }
        };

        RecommendationResponse {
            bmi: self.energy.bmi,
            bmr: self.energy.bmr.round() as i64,
            maintenance_calories: self.energy.maintenance_calories,
            target_calories: self.energy.target_calories,
            protein_g: self.macros.protein_g,
            carbs_g: self.macros.carbs_g,
            fat_g: self.macros.fat_g,
            workouts,
            meals,
            total_meal_calories,
            training_split: self.training_split.clone(),
            errors,
        }
    }
}

fn section_error(section: &str, error: &AppError) -> SectionError {
    SectionError {
        section: section.to_owned(),
        error: ErrorResponseDetails::from(error),
    }
}

/// Recommendation engine over a shared catalog
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    config: &'a EngineConfig,
    catalog: &'a CatalogStore,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine borrowing `config` and `catalog`
    #[must_use]
    pub const fn new(config: &'a EngineConfig, catalog: &'a CatalogStore) -> Self {
        Self { config, catalog }
    }

    /// Build a recommendation for a validated profile
    ///
    /// # Errors
    ///
    /// Returns an error if the energy profile or macro split cannot be computed.
    /// Workout and meal failures are recorded on the returned value instead.
    pub fn recommend(&self, profile: &UserProfile) -> AppResult<Recommendation> {
        let energy = calculate_energy_profile(profile, &self.config.energy)?;
        let macros = split_macros(
            energy.target_calories,
            profile.weight_kg(),
            &self.config.macros,
        )?;

        let goal = profile.goal();
        let fingerprint = self.catalog.fingerprint();

        let workout_key = format!("{goal}:{}", profile.days_per_week());
        let mut workout_rng = section_rng(
            &self.config.sampling,
            SamplingSection::Workouts,
            workout_key.as_bytes(),
            fingerprint,
        );
        let workouts = select_workouts(
            self.catalog,
            goal,
            profile.days_per_week(),
            &self.config.workouts,
            &mut workout_rng,
        );

        let meal_key = format!("{goal}:{}", energy.target_calories);
        let mut meal_rng = section_rng(
            &self.config.sampling,
            SamplingSection::Meals,
            meal_key.as_bytes(),
            fingerprint,
        );
        let meals = plan_meals(
            self.catalog,
            goal,
            energy.target_calories,
            &self.config.meal_planner,
            &mut meal_rng,
        );

        if let Err(e) = &workouts {
            warn!(section = "workouts", code = ?e.code, error = %e, "Section failed");
        }
        if let Err(e) = &meals {
            warn!(section = "meals", code = ?e.code, error = %e, "Section failed");
        }

        info!(
            goal = %goal,
            activity = %profile.activity(),
            days_per_week = profile.days_per_week(),
            target_calories = energy.target_calories,
            workouts = workouts.as_ref().map_or(0, |w| w.exercises.len()),
            meals = meals.as_ref().map_or(0, |m| m.entries.len()),
            topup_iterations = meals.as_ref().map_or(0, |m| m.topup_iterations),
            reproducible = self.config.sampling.reproducible,
            "Recommendation generated"
        );

        Ok(Recommendation {
            profile: profile.clone(),
            energy,
            macros,
            workouts,
            meals,
            training_split: weekly_split(goal, profile.days_per_week()),
        })
    }

    /// Parse a raw request and build its response record
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation or the energy/macro
    /// computation fails
    pub fn recommend_request(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RecommendationResponse> {
        let profile = UserProfile::try_from(request)?;
        Ok(self.recommend(&profile)?.to_response())
    }
}
