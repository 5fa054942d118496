// ABOUTME: Accepted profile ranges and nutrition energy densities
// ABOUTME: Single source for validation bounds used by the profile constructor and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Accepted profile input ranges
pub mod profile_limits {
    /// Minimum age in years (inclusive)
    pub const MIN_AGE: u32 = 12;
    /// Maximum age in years (inclusive)
    pub const MAX_AGE: u32 = 90;
    /// Weight lower bound in kg (exclusive)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Weight upper bound in kg (inclusive)
    pub const MAX_WEIGHT_KG: f64 = 200.0;
    /// Height lower bound in cm (exclusive)
    pub const MIN_HEIGHT_CM: f64 = 120.0;
    /// Height upper bound in cm (inclusive)
    pub const MAX_HEIGHT_CM: f64 = 230.0;
    /// Minimum training days per week
    pub const MIN_DAYS_PER_WEEK: u8 = 1;
    /// Maximum training days per week
    pub const MAX_DAYS_PER_WEEK: u8 = 7;
    /// Training days assumed when the request omits them
    pub const DEFAULT_DAYS_PER_WEEK: u8 = 4;
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy_density {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrates: 4 kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Service names
pub mod service_names {
    /// Recommendation engine CLI
    pub const FITCOACH: &str = "fitcoach";
}
