// ABOUTME: Integration tests for the macronutrient split
// ABOUTME: Checks the reference split, the carbohydrate floor and the calorie breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use fitcoach::config::MacroConfig;
use fitcoach::errors::ErrorCode;
use fitcoach::intelligence::macro_splitter::split_macros;

#[test]
fn test_reference_split() {
    let macros = split_macros(2000, 70.0, &MacroConfig::default()).unwrap();

    assert_eq!(macros.protein_g, 112);
    assert_eq!(macros.fat_g, 56);
    assert_eq!(macros.carbs_g, 263);
    assert_eq!(macros.calories.protein_kcal, 448.0);
    assert_eq!(macros.calories.fat_kcal, 500.0);
    assert_eq!(macros.calories.carbs_kcal, 1052.0);
}

#[test]
fn test_carbs_floor_at_zero_without_rebalancing() {
    let macros = split_macros(1200, 200.0, &MacroConfig::default()).unwrap();

    // protein alone is 1280 kcal, above the whole target
    assert_eq!(macros.protein_g, 320);
    assert_eq!(macros.fat_g, 33);
    assert_eq!(macros.carbs_g, 0);
    assert_eq!(macros.calories.carbs_kcal, 0.0);
}

#[test]
fn test_carbs_never_negative_across_weights() {
    let config = MacroConfig::default();
    for weight in [31.0, 60.0, 90.0, 130.0, 170.0, 200.0] {
        for target in [1200, 1500, 2000, 3000] {
            let macros = split_macros(target, weight, &config).unwrap();
            assert!(macros.carbs_g >= 0, "{weight} kg / {target} kcal");
        }
    }
}

#[test]
fn test_invalid_inputs() {
    let config = MacroConfig::default();
    assert_eq!(
        split_macros(-100, 70.0, &config).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        split_macros(2000, f64::NAN, &config).unwrap_err().code,
        ErrorCode::InvalidInput
    );
}
