// ABOUTME: Core types and constants for the fitcoach recommendation engine
// ABOUTME: Foundation crate with error handling, profile/catalog models, and validation ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitcoach Core
//!
//! Foundation crate providing shared types for the fitcoach recommendation
//! engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Accepted input ranges and nutrition constants
//! - **models**: User profile enums and read-only catalog records

/// Unified error handling system with standard error codes
pub mod errors;

/// Input validation ranges and physiological constants
pub mod constants;

/// Core data models (`UserProfile`, `WorkoutEntry`, `MealEntry`, enums)
pub mod models;
