//! Seeded synthetic input vectors.
//!
//! The core does not care where input vectors come from; this module is the
//! demo driver's collaborator. Generation is deterministic given the seed so
//! runs are reproducible.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{FitConfig, InputDistribution};
use crate::error::FitError;

/// Generate `trials` input vectors of `input_len` values each.
pub fn generate_inputs(config: &FitConfig) -> Result<Vec<Vec<f64>>, FitError> {
    if config.trials == 0 {
        return Err(FitError::config("Trial count must be > 0."));
    }
    if config.input_len == 0 {
        return Err(FitError::config("Input vector length must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.5, 0.25)
        .map_err(|e| FitError::config(format!("Input distribution error: {e}")))?;

    let mut vectors = Vec::with_capacity(config.trials);
    for _ in 0..config.trials {
        let mut values = Vec::with_capacity(config.input_len);
        for _ in 0..config.input_len {
            let v = match config.distribution {
                InputDistribution::Uniform => rng.gen_range(0.0..1.0),
                InputDistribution::Normal => normal.sample(&mut rng),
            };
            values.push(v);
        }
        vectors.push(values);
    }
    Ok(vectors)
}
