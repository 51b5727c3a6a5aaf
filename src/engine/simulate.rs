//! Public facade of the pure-Rust core (spec.md §4.1): `simulate` and
//! `goal_probability`. Paths are generated in parallel across shards of `S`
//! with `rayon`, following the teacher's `generate_paths_parallel` pattern;
//! each shard owns its own RNG substream (spec.md §5) instead of sharing the
//! teacher's thread-local singleton.

use nalgebra::DMatrix;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::engine::classify::classify;
use crate::engine::config::{self, AssetParams, SimulationConfig};
use crate::engine::correlation;
use crate::engine::integrator::simulate_path;
use crate::engine::result::{GoalReport, SimulationResult};
use crate::engine::rng::StochasticRng;
use crate::engine::stats;
use crate::error::{EngineError, EngineResult};

/// Paths are generated in shards of this size; each shard gets its own RNG
/// substream so the result is reproducible independent of thread count.
const SHARD_SIZE: usize = 64;

#[instrument(skip(assets, config, correlation_rows))]
pub fn simulate(
    assets: &[AssetParams],
    config: &SimulationConfig,
    correlation_rows: Option<&[Vec<f64>]>,
) -> EngineResult<SimulationResult> {
    config::validate(assets, config)?;

    let a = assets.len();
    let weights: Vec<f64> = assets.iter().map(|x| x.weight).collect();
    let means: Vec<f64> = assets.iter().map(|x| x.mean).collect();
    let vols: Vec<f64> = assets.iter().map(|x| x.volatility).collect();

    let correlation_l: Option<DMatrix<f64>> = if config.use_correlation {
        let raw_matrix = match correlation_rows {
            Some(rows) => {
                config::validate_correlation(rows, a)?;
                correlation::from_rows(rows)
            }
            None => {
                let classes: Vec<_> = assets.iter().map(|x| classify(&x.id)).collect();
                correlation::synthesize(&classes)
            }
        };
        Some(correlation::factorize(&raw_matrix)?)
    } else {
        None
    };

    let root_seed = config.root_seed.unwrap_or_else(|| StochasticRng::from_entropy().uniform_u64());

    let num_shards = (config.num_paths + SHARD_SIZE - 1) / SHARD_SIZE;
    let paths: Vec<Vec<f64>> = (0..num_shards)
        .into_par_iter()
        .flat_map(|shard| {
            let shard_start = shard * SHARD_SIZE;
            let shard_len = SHARD_SIZE.min(config.num_paths - shard_start);
            let mut rng = StochasticRng::substream(root_seed, shard as u64);
            (0..shard_len)
                .map(|_| {
                    simulate_path(
                        &mut rng,
                        &weights,
                        &means,
                        &vols,
                        correlation_l.as_ref(),
                        config,
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect();

    for path in &paths {
        for v in path {
            if !v.is_finite() {
                return Err(EngineError::numeric("non-finite value produced in path"));
            }
        }
    }

    let final_values: Vec<f64> = paths.iter().map(|p| *p.last().unwrap()).collect();

    let metrics = stats::compute_metrics(&final_values, config.initial_value, config.horizon_steps);
    let percentiles = stats::compute_percentiles(&final_values);
    let drawdowns = stats::compute_drawdowns(&paths);
    let fan_chart = stats::compute_fan_chart(&paths, config.horizon_steps);
    let sample_paths = stats::sample_representative_paths(&paths);

    debug!(num_paths = paths.len(), horizon = config.horizon_steps, "simulation complete");

    Ok(SimulationResult {
        paths,
        final_values,
        metrics,
        percentiles,
        drawdowns,
        fan_chart,
        sample_paths,
    })
}

pub fn goal_probability(result: &SimulationResult, target: f64) -> GoalReport {
    stats::goal_probability(&result.final_values, &result.paths, target)
}

impl StochasticRng {
    /// Full-range u64 draw, used only to mint a root seed from OS entropy
    /// when the caller doesn't supply one.
    fn uniform_u64(&mut self) -> u64 {
        let hi = (self.uniform() * u32::MAX as f64) as u64;
        let lo = (self.uniform() * u32::MAX as f64) as u64;
        (hi << 32) | lo
    }
}
