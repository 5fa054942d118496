// ABOUTME: Integration tests for BMI, BMR, maintenance and target calorie calculations
// ABOUTME: Covers reference values, goal adjustments, the weight-loss floor and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::cast_precision_loss)]

mod common;

use fitcoach::config::{ActivityFactorsConfig, BmrConfig, EnergyConfig};
use fitcoach::errors::ErrorCode;
use fitcoach::intelligence::energy_model::{
    calculate_energy_profile, calculate_maintenance_calories, calculate_mifflin_st_jeor,
};
use fitcoach::models::{ActivityLevel, FitnessGoal, Sex, UserProfile};

#[test]
fn test_mifflin_st_jeor_reference_male() {
    let bmr = calculate_mifflin_st_jeor(70.0, 175.0, 25, Sex::Male, &BmrConfig::default()).unwrap();
    // 700 + 1093.75 - 125 + 5
    assert_eq!(bmr, 1673.75);
}

#[test]
fn test_other_sex_uses_non_male_constant() {
    let config = BmrConfig::default();
    let female = calculate_mifflin_st_jeor(60.0, 165.0, 30, Sex::Female, &config).unwrap();
    let other = calculate_mifflin_st_jeor(60.0, 165.0, 30, Sex::Other, &config).unwrap();
    let male = calculate_mifflin_st_jeor(60.0, 165.0, 30, Sex::Male, &config).unwrap();
    assert_eq!(female, other);
    assert_eq!(male - female, 166.0);
}

#[test]
fn test_maintenance_rounds_activity_scaled_bmr() {
    let factors = ActivityFactorsConfig::default();
    // 1736.25 x 1.55 = 2691.19
    assert_eq!(
        calculate_maintenance_calories(1736.25, ActivityLevel::Moderate, &factors).unwrap(),
        2691
    );
    // 1673.75 x 1.725 = 2887.22
    assert_eq!(
        calculate_maintenance_calories(1673.75, ActivityLevel::Active, &factors).unwrap(),
        2887
    );
}

#[test]
fn test_energy_profile_for_reference_user() {
    common::init_test_logging();
    let profile = common::reference_profile(FitnessGoal::GeneralFitness);
    let energy = calculate_energy_profile(&profile, &EnergyConfig::default()).unwrap();

    assert!((energy.bmi - 22.857).abs() < 0.001);
    assert_eq!(energy.bmr, 1673.75);
    // 1673.75 x 1.55 = 2594.31
    assert_eq!(energy.maintenance_calories, 2594);
    assert_eq!(energy.target_calories, 2594);
}

#[test]
fn test_muscle_gain_adds_surplus_exactly() {
    let config = EnergyConfig::default();
    for activity in ActivityLevel::ALL {
        let profile =
            UserProfile::new(40, Sex::Female, 65.0, 170.0, activity, FitnessGoal::MuscleGain, 3)
                .unwrap();
        let energy = calculate_energy_profile(&profile, &config).unwrap();
        assert_eq!(energy.target_calories, energy.maintenance_calories + 300);
    }
}

#[test]
fn test_weight_loss_subtracts_deficit_above_floor() {
    let profile = common::reference_profile(FitnessGoal::WeightLoss);
    let energy = calculate_energy_profile(&profile, &EnergyConfig::default()).unwrap();
    assert_eq!(energy.target_calories, 2594 - 500);
}

#[test]
fn test_weight_loss_target_never_below_floor() {
    let config = EnergyConfig::default();
    let ages = [12, 18, 30, 45, 60, 75, 90];
    let weights = [30.5, 40.0, 55.0, 80.0, 120.0, 200.0];
    let heights = [120.5, 140.0, 160.0, 180.0, 200.0, 230.0];
    let sexes = [Sex::Male, Sex::Female, Sex::Other];

    for age in ages {
        for weight in weights {
            for height in heights {
                for sex in sexes {
                    for activity in ActivityLevel::ALL {
                        let profile = UserProfile::new(
                            age,
                            sex,
                            weight,
                            height,
                            activity,
                            FitnessGoal::WeightLoss,
                            4,
                        )
                        .unwrap();
                        let energy = calculate_energy_profile(&profile, &config).unwrap();
                        assert!(
                            energy.target_calories >= 1200,
                            "target {} for {profile:?}",
                            energy.target_calories
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_out_of_range_inputs_rejected() {
    let config = BmrConfig::default();
    let cases = [
        (30.0, 175.0, 25),
        (200.5, 175.0, 25),
        (70.0, 120.0, 25),
        (70.0, 231.0, 25),
        (70.0, 175.0, 11),
        (70.0, 175.0, 91),
    ];
    for (weight, height, age) in cases {
        let err = calculate_mifflin_st_jeor(weight, height, age, Sex::Male, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "{weight} {height} {age}");
    }
}

#[test]
fn test_boundary_values_accepted() {
    let config = BmrConfig::default();
    assert!(calculate_mifflin_st_jeor(200.0, 230.0, 90, Sex::Male, &config).is_ok());
    assert!(calculate_mifflin_st_jeor(30.1, 120.1, 12, Sex::Female, &config).is_ok());
}
