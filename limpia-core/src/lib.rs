pub mod batch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod preemph;
pub mod wav;

// Re-export primary API types
pub use batch::{EvalWindows, TrainBatcher};
pub use config::DataConfig;
pub use dataset::DatasetPaths;
pub use error::{Error, Result};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Load a clean/noisy training pair through the cache and wrap it in a
/// batcher whose shuffle RNG is seeded from `config.seed`.
///
/// This is the one-shot API for training drivers. Construct
/// [`TrainBatcher`] directly to inject a different random source.
pub fn load_training_set(config: &DataConfig, paths: &DatasetPaths) -> Result<TrainBatcher> {
    let (clean, noisy) = dataset::load_pair(config, paths)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    TrainBatcher::new(clean, noisy, config.batch_size, &mut rng)
}

/// Load a clean/noisy evaluation pair through the cache and window the
/// full block range.
pub fn load_eval_set(config: &DataConfig, paths: &DatasetPaths) -> Result<EvalWindows> {
    let (clean, noisy) = dataset::load_pair(config, paths)?;
    EvalWindows::new(&clean, &noisy)
}
