use log::info;
use rayon::prelude::*;

use crate::entities::PlacementResult;
use crate::error::ConfigError;
use crate::placement::{PlacementConfig, PlacementEngine, rng_from_seed};

/// Runs one independent placement per seed, in parallel.
///
/// Every run owns its own index and PRNG and is internally sequential,
/// so each seeded result equals the one of a single run with the same seed.
/// `None` seeds draw their PRNG state from OS entropy.
/// Results are returned in the order of `seeds`.
pub fn place_batch(
    config: &PlacementConfig,
    seeds: &[Option<u32>],
) -> Vec<Result<PlacementResult, ConfigError>> {
    info!("[BATCH] generating {} panels in parallel", seeds.len());
    seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = rng_from_seed(seed);
            PlacementEngine::place(
                &config.canvas,
                &config.specs,
                config.gap,
                config.max_attempts_per_circle,
                &mut rng,
            )
        })
        .collect()
}
