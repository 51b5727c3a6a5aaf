//! Path integrator (spec.md §4.7): composes innovations, volatility,
//! regime, and jumps into per-asset log-returns, aggregates by weight into
//! a portfolio log-return, and compounds into a value path.

use nalgebra::DMatrix;
use wide::f64x4;

use crate::engine::config::{PathUpdateMode, SimulationConfig};
use crate::engine::innovations::{correlate_into, draw_raw_into};
use crate::engine::jumps;
use crate::engine::regime::RegimeModel;
use crate::engine::rng::StochasticRng;
use crate::engine::volatility::GarchState;

/// Dot product of `weights` and `returns`, vectorized 4 lanes at a time with
/// a scalar remainder — the same chunk-then-scalar-remainder shape as the
/// teacher's `vectorized.rs` SIMD option-pricing kernels, applied here along
/// the asset axis instead of the option-batch axis.
#[inline]
fn weighted_sum_simd(weights: &[f64], returns: &[f64]) -> f64 {
    let n = weights.len();
    let chunks = n / 4;
    let mut acc = f64x4::splat(0.0);
    for c in 0..chunks {
        let i = c * 4;
        let w = f64x4::new([weights[i], weights[i + 1], weights[i + 2], weights[i + 3]]);
        let r = f64x4::new([returns[i], returns[i + 1], returns[i + 2], returns[i + 3]]);
        acc += w * r;
    }
    let mut total: f64 = acc.to_array().iter().sum();
    for i in (chunks * 4)..n {
        total += weights[i] * returns[i];
    }
    total
}

/// Simulate a single path of length `cfg.horizon_steps + 1`, starting at
/// `cfg.initial_value`. `rng` is the caller's (sub)stream for this path.
#[allow(clippy::too_many_arguments)]
pub fn simulate_path(
    rng: &mut StochasticRng,
    weights: &[f64],
    means: &[f64],
    base_vol: &[f64],
    correlation_l: Option<&DMatrix<f64>>,
    cfg: &SimulationConfig,
) -> Vec<f64> {
    let a = weights.len();
    let mut garch = GarchState::new(base_vol);
    let mut regime = RegimeModel::new();

    let mut raw = vec![0.0; a];
    let mut correlated = vec![0.0; a];
    let mut asset_returns = vec![0.0; a];

    let mut value = cfg.initial_value;
    let mut path = Vec::with_capacity(cfg.horizon_steps + 1);
    path.push(value);

    let dividend_drift = cfg.dividend_yield / 252.0;

    for t in 0..cfg.horizon_steps {
        draw_raw_into(rng, cfg.use_fat_tails, cfg.student_df, &mut raw);

        let z: &[f64] = if cfg.use_correlation {
            if let Some(l) = correlation_l {
                correlate_into(l, &raw, &mut correlated);
                &correlated
            } else {
                &raw
            }
        } else {
            &raw
        };

        let (drift_mult, vol_mult) = if cfg.use_regime {
            regime.multipliers(cfg)
        } else {
            (1.0, 1.0)
        };

        for asset in 0..a {
            let vol_t = if cfg.use_garch {
                garch.vol(asset)
            } else {
                base_vol[asset]
            };
            let jump = if cfg.use_jumps {
                jumps::draw(rng, cfg)
            } else {
                0.0
            };
            asset_returns[asset] =
                z[asset] * vol_t * vol_mult + means[asset] * drift_mult + jump + dividend_drift;
        }

        let portfolio_return = weighted_sum_simd(weights, &asset_returns);

        if cfg.use_garch {
            garch.step(&raw, base_vol, cfg);
        }
        if cfg.use_regime {
            let u = rng.uniform();
            regime.advance(u, cfg);
        }

        value = match cfg.path_update_mode {
            PathUpdateMode::Exponential => value * portfolio_return.exp(),
            PathUpdateMode::Additive => value * (1.0 + portfolio_return),
        };

        if cfg.contribution_amount != 0.0
            && cfg.contribution_interval_steps > 0
            && (t + 1) % cfg.contribution_interval_steps == 0
        {
            value += cfg.contribution_amount;
        }

        path.push(value);
    }

    path
}
