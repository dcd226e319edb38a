mod batch;
mod config;
mod engine;
mod sampler;

#[doc(inline)]
pub use batch::place_batch;

#[doc(inline)]
pub use config::PlacementConfig;

#[doc(inline)]
pub use engine::PlacementEngine;

#[doc(inline)]
pub use engine::local_max_attempts;

#[doc(inline)]
pub use engine::spec_placement_order;

#[doc(inline)]
pub use engine::validate;

#[doc(inline)]
pub use sampler::UniformCanvasSampler;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Creates the PRNG for a placement run.
/// A seeded run is fully reproducible, without a seed the generator is seeded from OS entropy.
///
/// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
pub fn rng_from_seed(seed: Option<u32>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed as u64),
        None => SmallRng::from_os_rng(),
    }
}
