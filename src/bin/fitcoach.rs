// ABOUTME: Command-line front end for the fitcoach recommendation engine
// ABOUTME: Prints recommendations as JSON or text and summarizes the loaded catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Recommendation from the embedded catalog
//! fitcoach recommend --age 25 --sex male --weight-kg 70 --height-cm 175 \
//!     --activity moderate --goal "muscle gain"
//!
//! # Human-readable output with a custom catalog directory
//! fitcoach recommend --age 40 --sex female --weight-kg 68 --height-cm 165 \
//!     --activity light --goal weight_loss --data-dir ./data --format text
//!
//! # Row counts per goal and meal slot
//! fitcoach catalog --data-dir ./data
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fitcoach::catalog::CatalogStore;
use fitcoach::config::EngineConfig;
use fitcoach::constants::profile_limits::DEFAULT_DAYS_PER_WEEK;
use fitcoach::errors::{AppError, ErrorResponse};
use fitcoach::intelligence::RecommendationEngine;
use fitcoach::logging;
use fitcoach::models::{RecommendationRequest, RecommendationResponse};
use tracing::error;

#[derive(Parser)]
#[command(
    name = "fitcoach",
    version,
    about = "Calorie, macro, workout and meal recommendations",
    long_about = "Computes BMI, BMR, maintenance and target calories, a macro split, \
                  a workout selection, a daily meal plan and a weekly training split \
                  from a user profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog directory containing workouts.csv and nutrition.csv
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a recommendation for one profile
    Recommend {
        /// Age in years (12-90)
        #[arg(long)]
        age: u32,

        /// Male, Female or Other
        #[arg(long)]
        sex: String,

        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Sedentary, Light, Moderate or Active
        #[arg(long)]
        activity: String,

        /// Weight Loss, Muscle Gain or General Fitness
        #[arg(long)]
        goal: String,

        /// Training days per week (1-7)
        #[arg(long, default_value_t = DEFAULT_DAYS_PER_WEEK)]
        days_per_week: u8,

        /// Seed salt for reproducible sampling
        #[arg(long, conflicts_with = "random")]
        seed: Option<u64>,

        /// Draw workouts and meals from fresh entropy
        #[arg(long)]
        random: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show catalog row counts per goal and meal slot
    Catalog,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_from_env()?;

    let mut config = EngineConfig::load()?;
    if let Some(dir) = cli.data_dir {
        config.catalog.data_dir = Some(dir);
    }

    match cli.command {
        Command::Recommend {
            age,
            sex,
            weight_kg,
            height_cm,
            activity,
            goal,
            days_per_week,
            seed,
            random,
            format,
        } => {
            if let Some(seed) = seed {
                config.sampling.reproducible = true;
                config.sampling.seed = seed;
            }
            if random {
                config.sampling.reproducible = false;
            }

            let request = RecommendationRequest {
                age,
                sex,
                weight_kg,
                height_cm,
                activity,
                goal,
                days_per_week,
            };
            run_recommend(&config, &request, format)
        }
        Command::Catalog => {
            let catalog = CatalogStore::from_config(&config.catalog)?;
            println!("{}", serde_json::to_string_pretty(&catalog.summary())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_recommend(
    config: &EngineConfig,
    request: &RecommendationRequest,
    format: OutputFormat,
) -> Result<ExitCode> {
    let catalog = CatalogStore::from_config(&config.catalog)?;
    let engine = RecommendationEngine::new(config, &catalog);

    match engine.recommend_request(request) {
        Ok(response) => {
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
                OutputFormat::Text => print!("{}", render_text(&response)),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &AppError) -> Result<ExitCode> {
    error!(code = ?e.code, "Recommendation failed: {e}");
    println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(e))?);
    Ok(if e.code.is_client_error() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    })
}

fn render_text(response: &RecommendationResponse) -> String {
    let mut lines = vec![
        format!("BMI: {:.1}", response.bmi),
        format!("BMR: {} kcal/day", response.bmr),
        format!("Maintenance: {} kcal/day", response.maintenance_calories),
        format!("Target: {} kcal/day", response.target_calories),
        format!(
            "Macros: protein {} g, carbs {} g, fat {} g",
            response.protein_g, response.carbs_g, response.fat_g
        ),
        String::new(),
        "Workouts:".to_owned(),
    ];
    lines.extend(response.workouts.iter().map(|w| {
        format!(
            "  - {} ({}, {} min, {})",
            w.exercise, w.category, w.duration_mins, w.reps_or_time
        )
    }));

    lines.push(String::new());
    lines.push(format!("Meals ({} kcal):", response.total_meal_calories));
    lines.extend(response.meals.iter().map(|m| {
        format!(
            "  - {}: {} ({} kcal) - {}",
            m.meal_type, m.meal_name, m.calories, m.items
        )
    }));

    lines.push(String::new());
    lines.push(response.training_split.summary.clone());
    lines.extend(
        response
            .training_split
            .days
            .iter()
            .map(|day| format!("  Day {}: {}", day.day, day.session)),
    );

    for section in &response.errors {
        lines.push(String::new());
        lines.push(format!(
            "[{}] unavailable: {}",
            section.section, section.error.message
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_lists_every_section() {
        let config = EngineConfig::default();
        let catalog = CatalogStore::embedded().unwrap();
        let request = RecommendationRequest {
            age: 25,
            sex: "Male".into(),
            weight_kg: 70.0,
            height_cm: 175.0,
            activity: "Moderate".into(),
            goal: "Muscle Gain".into(),
            days_per_week: 4,
        };
        let response = RecommendationEngine::new(&config, &catalog)
            .recommend_request(&request)
            .unwrap();
        let text = render_text(&response);

        assert!(text.starts_with("BMI: 22.9\n"), "{text}");
        assert!(text.contains("Target: 2894 kcal/day\n"));
        assert_eq!(
            text.lines().filter(|l| l.starts_with("  Day ")).count(),
            4
        );
        assert_eq!(
            text.lines().filter(|l| l.starts_with("  - ")).count(),
            response.workouts.len() + response.meals.len()
        );
        assert!(!text.contains("unavailable"));
        assert!(text.ends_with('\n'));
    }
}
