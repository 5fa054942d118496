// ABOUTME: Request-local random sources for catalog sampling
// ABOUTME: Derives stable ChaCha8 seeds from request inputs and catalog contents in reproducible mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Random sources for the workout selector and meal planner.
//!
//! In reproducible mode the seed is a SHA-256 digest of the configured salt,
//! the section name, the request inputs that affect that section, and the
//! catalog fingerprint. The same request against the same catalog therefore
//! always draws the same rows. Otherwise each call gets a fresh
//! entropy-seeded generator that lives only for that request.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use crate::config::SamplingConfig;

/// Section of the recommendation a random source is drawn for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingSection {
    /// Workout selection
    Workouts,
    /// Meal planning and top-up
    Meals,
}

impl SamplingSection {
    const fn label(self) -> &'static [u8] {
        match self {
            Self::Workouts => b"workouts",
            Self::Meals => b"meals",
        }
    }
}

/// Derive a 64-bit seed from the salt, section, request key and catalog
#[must_use]
pub fn derive_seed(salt: u64, section: SamplingSection, key: &[u8], catalog: &[u8; 32]) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(salt.to_le_bytes());
    hasher.update(section.label());
    hasher.update((key.len() as u64).to_le_bytes());
    hasher.update(key);
    hasher.update(catalog);
    let digest = hasher.finalize();

    let mut bytes = [0_u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Random source for one section of one request
#[must_use]
pub fn section_rng(
    config: &SamplingConfig,
    section: SamplingSection,
    key: &[u8],
    catalog: &[u8; 32],
) -> ChaCha8Rng {
    if config.reproducible {
        ChaCha8Rng::seed_from_u64(derive_seed(config.seed, section, key, catalog))
    } else {
        ChaCha8Rng::from_entropy()
    }
}
