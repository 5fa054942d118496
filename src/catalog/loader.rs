// ABOUTME: CSV ingestion for the workout and meal catalogs
// ABOUTME: Maps raw rows to typed entries, rejecting rows with unknown goals or meal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Read;

use csv::{Position, ReaderBuilder, StringRecord, Trim};
use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{FitnessGoal, MealEntry, MealType, WorkoutEntry};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Row layout of `workouts.csv`
#[derive(Debug, Deserialize)]
struct WorkoutRecord {
    exercise: String,
    category: String,
    duration_mins: f64,
    reps_or_time: String,
    description: String,
    target: String,
}

/// Row layout of `nutrition.csv`; older files name the goal column `goal`
#[derive(Debug, Deserialize)]
struct MealRecord {
    meal_type: String,
    meal: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fats_g: f64,
    items: String,
    #[serde(alias = "goal")]
    target: String,
}

/// Deserialize every row of `source`, passing each to `convert` with the
/// 1-based line its record starts on (the header is line 1).
fn read_rows<R, T, E>(
    source: R,
    dataset: &str,
    convert: impl Fn(T, u64) -> AppResult<E>,
) -> AppResult<Vec<E>>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);
    let load_error = |line: u64, e: csv::Error| {
        AppError::catalog_load(format!("{dataset} catalog, line {line}: {e}")).with_source(e)
    };

    let headers = reader.headers().map_err(|e| load_error(1, e))?.clone();
    let mut record = StringRecord::new();
    let mut rows = Vec::new();
    loop {
        let next_line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(load_error(next_line, e)),
        }
        let line = record.position().map_or(next_line, Position::line);
        let row = record
            .deserialize(Some(&headers))
            .map_err(|e| load_error(line, e))?;
        rows.push(convert(row, line)?);
    }
    Ok(rows)
}

fn parse_goal(raw: &str, dataset: &str, line: u64) -> AppResult<FitnessGoal> {
    raw.parse().map_err(|e: AppError| {
        AppError::catalog_load(format!("{dataset} catalog, line {line}: {}", e.message))
    })
}

fn non_negative(value: f64, field: &str, dataset: &str, line: u64) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::catalog_load(format!(
            "{dataset} catalog, line {line}: {field} must be a non-negative number, got {value}"
        )))
    }
}

/// Parse a workout catalog with a `exercise,category,duration_mins,reps_or_time,description,target` header
///
/// # Errors
///
/// Returns `CatalogLoad` if the CSV is malformed or a row names an unknown goal
pub fn read_workouts(source: impl Read) -> AppResult<Vec<WorkoutEntry>> {
    read_rows(source, "workout", |record: WorkoutRecord, line| {
        Ok(WorkoutEntry {
            target_goal: parse_goal(&record.target, "workout", line)?,
            exercise: record.exercise,
            category: record.category,
            duration_mins: non_negative(record.duration_mins, "duration_mins", "workout", line)?,
            reps_or_time: record.reps_or_time,
            description: record.description,
        })
    })
}

/// Parse a meal catalog with a `meal_type,meal,calories,protein_g,carbs_g,fats_g,items,target` header
///
/// # Errors
///
/// Returns `CatalogLoad` if the CSV is malformed, a row names an unknown goal or
/// meal type, or a nutrient value is negative
pub fn read_meals(source: impl Read) -> AppResult<Vec<MealEntry>> {
    read_rows(source, "meal", |record: MealRecord, line| {
        let meal_type: MealType = record.meal_type.parse().map_err(|e: AppError| {
            AppError::catalog_load(format!("meal catalog, line {line}: {}", e.message))
        })?;
        Ok(MealEntry {
            meal_type,
            target_goal: parse_goal(&record.target, "meal", line)?,
            meal_name: record.meal,
            calories: non_negative(record.calories, "calories", "meal", line)?,
            protein_g: non_negative(record.protein_g, "protein_g", "meal", line)?,
            carbs_g: non_negative(record.carbs_g, "carbs_g", "meal", line)?,
            fats_g: non_negative(record.fats_g, "fats_g", "meal", line)?,
            items: record.items,
        })
    })
}
