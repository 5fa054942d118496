// ABOUTME: Read-only catalog store for workouts and meals, loaded once per process
// ABOUTME: Exposes goal/slot filtered views and a content fingerprint for seed derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog Store
//!
//! The store owns the workout and meal datasets for the lifetime of the
//! process. It is never mutated after construction, so a single instance can
//! be shared by reference (or behind an `Arc`) across concurrent requests
//! without locking.

/// CSV ingestion
pub mod loader;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{FitnessGoal, MealEntry, MealType, WorkoutEntry};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::config::CatalogConfig;

/// File name of the workout catalog inside a data directory
pub const WORKOUTS_FILE: &str = "workouts.csv";
/// File name of the meal catalog inside a data directory
pub const MEALS_FILE: &str = "nutrition.csv";

const EMBEDDED_WORKOUTS_CSV: &str = include_str!("../../data/workouts.csv");
const EMBEDDED_MEALS_CSV: &str = include_str!("../../data/nutrition.csv");

/// Immutable workout and meal catalog
#[derive(Debug, Clone)]
pub struct CatalogStore {
    workouts: Vec<WorkoutEntry>,
    meals: Vec<MealEntry>,
    fingerprint: [u8; 32],
}

/// Row counts per goal and meal slot
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Total workout rows
    pub workouts: usize,
    /// Total meal rows
    pub meals: usize,
    /// Workout rows per goal label
    pub workouts_by_goal: BTreeMap<String, usize>,
    /// Meal rows per "goal / slot" label
    pub meals_by_goal_and_slot: BTreeMap<String, usize>,
}

impl CatalogStore {
    /// Build a store from already-parsed entries
    #[must_use]
    pub fn new(workouts: Vec<WorkoutEntry>, meals: Vec<MealEntry>) -> Self {
        let fingerprint = fingerprint(&workouts, &meals);
        Self {
            workouts,
            meals,
            fingerprint,
        }
    }

    /// Catalog compiled into the binary from `data/`
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoad` if the embedded files fail to parse
    pub fn embedded() -> AppResult<Self> {
        Self::from_readers(EMBEDDED_WORKOUTS_CSV.as_bytes(), EMBEDDED_MEALS_CSV.as_bytes())
    }

    /// Parse both catalogs from CSV sources
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoad` if either source is malformed
    pub fn from_readers(workouts: impl Read, meals: impl Read) -> AppResult<Self> {
        let workouts = loader::read_workouts(workouts)?;
        let meals = loader::read_meals(meals)?;
        Ok(Self::new(workouts, meals))
    }

    /// Load `workouts.csv` and `nutrition.csv` from a directory
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoad` if either file is missing or malformed
    pub fn load_dir(dir: &Path) -> AppResult<Self> {
        let open = |name: &str| {
            let path = dir.join(name);
            File::open(&path).map_err(|e| {
                AppError::catalog_load(format!("cannot open {}: {e}", path.display()))
                    .with_source(e)
            })
        };
        let store = Self::from_readers(open(WORKOUTS_FILE)?, open(MEALS_FILE)?)?;
        info!(
            catalog.dir = %dir.display(),
            catalog.workouts = store.workouts.len(),
            catalog.meals = store.meals.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    /// Load the catalog named by configuration, falling back to the embedded data
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoad` if the configured directory cannot be read
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        config
            .data_dir
            .as_deref()
            .map_or_else(Self::embedded, Self::load_dir)
    }

    /// Every workout row, in file order
    #[must_use]
    pub fn workouts(&self) -> &[WorkoutEntry] {
        &self.workouts
    }

    /// Every meal row, in file order
    #[must_use]
    pub fn meals(&self) -> &[MealEntry] {
        &self.meals
    }

    /// Workout rows tagged for `goal`
    #[must_use]
    pub fn workouts_for_goal(&self, goal: FitnessGoal) -> Vec<&WorkoutEntry> {
        self.workouts
            .iter()
            .filter(|w| w.target_goal == goal)
            .collect()
    }

    /// Meal rows matching an optional goal and an optional slot
    #[must_use]
    pub fn meals_matching(
        &self,
        goal: Option<FitnessGoal>,
        slot: Option<MealType>,
    ) -> Vec<&MealEntry> {
        self.meals
            .iter()
            .filter(|m| goal.is_none() || goal == Some(m.target_goal))
            .filter(|m| slot.is_none() || slot == Some(m.meal_type))
            .collect()
    }

    /// SHA-256 over every row, used to tie derived seeds to catalog contents
    #[must_use]
    pub const fn fingerprint(&self) -> &[u8; 32] {
        &self.fingerprint
    }

    /// Row counts for diagnostics
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let mut workouts_by_goal = BTreeMap::new();
        for workout in &self.workouts {
            *workouts_by_goal
                .entry(workout.target_goal.to_string())
                .or_insert(0) += 1;
        }
        let mut meals_by_goal_and_slot = BTreeMap::new();
        for meal in &self.meals {
            *meals_by_goal_and_slot
                .entry(format!("{} / {}", meal.target_goal, meal.meal_type))
                .or_insert(0) += 1;
        }
        CatalogSummary {
            workouts: self.workouts.len(),
            meals: self.meals.len(),
            workouts_by_goal,
            meals_by_goal_and_slot,
        }
    }
}

fn fingerprint(workouts: &[WorkoutEntry], meals: &[MealEntry]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    let mut field = |value: &[u8]| {
        hasher.update((value.len() as u64).to_le_bytes());
        hasher.update(value);
    };
    for w in workouts {
        field(w.exercise.as_bytes());
        field(w.category.as_bytes());
        field(&w.duration_mins.to_le_bytes());
        field(w.reps_or_time.as_bytes());
        field(w.description.as_bytes());
        field(w.target_goal.as_str().as_bytes());
    }
    for m in meals {
        field(m.meal_type.as_str().as_bytes());
        field(m.meal_name.as_bytes());
        for number in [m.calories, m.protein_g, m.carbs_g, m.fats_g] {
            field(&number.to_le_bytes());
        }
        field(m.items.as_bytes());
        field(m.target_goal.as_str().as_bytes());
    }
    let digest = hasher.finalize();
    let mut out = [0_u8; 32];
    out.copy_from_slice(&digest);
    out
}
