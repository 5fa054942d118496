// ABOUTME: Core data models for profiles and catalog records
// ABOUTME: Re-exports profile enums, UserProfile, and catalog entry types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Read-only catalog records
pub mod catalog;
/// User profile and its enums
pub mod profile;

pub use catalog::{MealEntry, MealType, WorkoutEntry};
pub use profile::{ActivityLevel, FitnessGoal, Sex, UserProfile};
