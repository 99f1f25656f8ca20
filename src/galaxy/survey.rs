//! Multi-seed survey
//!
//! Generates many independent galaxies in parallel and measures how often
//! different seeds collide. Each generation owns its own PRS, so the calls
//! share no state and can run on any thread.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::config::{GenerationLimits, GenerationParams};
use crate::galaxy::generation::generate_galaxy_with_limits;

/// One surveyed galaxy
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySample {
    pub seed: String,
    pub fingerprint: u64,
    pub star_count: usize,
    pub body_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub samples: Vec<SurveySample>,
    pub distinct_fingerprints: usize,
    pub distinct_body_counts: usize,
    /// Fraction of samples whose fingerprint repeats an earlier sample
    pub collision_rate: f64,
}

/// Survey the given seeds. Samples come back in input order.
pub fn survey<S: AsRef<str> + Sync>(
    seeds: &[S],
    params: &GenerationParams,
    limits: &GenerationLimits,
) -> SurveyReport {
    let samples: Vec<SurveySample> = seeds
        .par_iter()
        .map(|seed| {
            let seed = seed.as_ref();
            let galaxy = generate_galaxy_with_limits(seed, params, limits);
            SurveySample {
                seed: seed.to_string(),
                fingerprint: galaxy.fingerprint(),
                star_count: galaxy.star_count(),
                body_count: galaxy.bodies().len(),
            }
        })
        .collect();

    let distinct_fingerprints = samples
        .iter()
        .map(|s| s.fingerprint)
        .collect::<HashSet<_>>()
        .len();
    let distinct_body_counts = samples
        .iter()
        .map(|s| s.body_count)
        .collect::<HashSet<_>>()
        .len();

    let collision_rate = if samples.is_empty() {
        0.0
    } else {
        (samples.len() - distinct_fingerprints) as f64 / samples.len() as f64
    };

    tracing::debug!(
        "Surveyed {} seeds: {} distinct fingerprints, {} distinct body counts",
        samples.len(),
        distinct_fingerprints,
        distinct_body_counts
    );

    SurveyReport {
        samples,
        distinct_fingerprints,
        distinct_body_counts,
        collision_rate,
    }
}

/// Seeds `{prefix}0` through `{prefix}{count - 1}`
pub fn numbered_seeds(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}
