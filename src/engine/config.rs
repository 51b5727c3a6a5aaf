//! Explicit configuration types.
//!
//! Replaces the loose option-bag the original Python source passes around
//! (`SimulationConfig` dataclass with a handful of `use_*` booleans) with one
//! struct enumerating every toggle and every tunable constant, each with the
//! default spec.md §9 lists.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

pub const MAX_ASSETS: usize = 20;
pub const MIN_PATHS: usize = 100;
pub const MAX_PATHS: usize = 10_000;
pub const MAX_STEPS: usize = 2520;
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-2;

/// S*T*A ceiling at or above which the facade rejects a request outright
/// rather than attempt an allocation (spec.md §4.9, §7 ResourceLimit). Equal
/// to `MAX_PATHS * MAX_STEPS * MAX_ASSETS`, so the per-field clamps above
/// alone can reach but never exceed it — the check must be inclusive or it
/// is unreachable.
pub const STA_CEILING: u64 = 10_000 * 2520 * 20;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AssetParams {
    pub id: String,
    pub weight: f64,
    pub mean: f64,
    pub volatility: f64,
}

/// Coarse asset-class tag used only by correlation synthesis (spec.md §4.2).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetClass {
    Equity,
    TechEquity,
    Bond,
    Commodity,
    Other,
}

/// Two path-update formulations (spec.md §9 Open Questions). The engine
/// defaults to `Exponential`; `Additive` reproduces the original Python
/// source's `P * (1 + r)` recurrence for callers who need bit-for-bit
/// parity with that engine instead of numerical stability.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PathUpdateMode {
    #[default]
    Exponential,
    Additive,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    pub initial_value: f64,
    pub horizon_steps: usize,
    pub num_paths: usize,

    pub use_correlation: bool,
    pub use_fat_tails: bool,
    pub use_garch: bool,
    pub use_regime: bool,
    pub use_jumps: bool,

    pub student_df: f64,

    pub garch_omega: f64,
    pub garch_alpha: f64,
    pub garch_beta: f64,

    pub regime_p_bull_to_bear: f64,
    pub regime_p_bear_to_bull: f64,
    pub regime_bull_drift_mult: f64,
    pub regime_bull_vol_mult: f64,
    pub regime_bear_drift_mult: f64,
    pub regime_bear_vol_mult: f64,

    pub jump_intensity: f64,
    pub jump_mean: f64,
    pub jump_vol: f64,

    pub path_update_mode: PathUpdateMode,

    /// Constant per-step log-drift addition, `dividend_yield / 252` (spec.md
    /// §9 dividend-yield extension). Zero by default.
    pub dividend_yield: f64,
    /// Fixed cash injected into every path every `contribution_interval_steps`
    /// steps (spec.md §9 contributions extension). Zero amount by default,
    /// which makes the interval irrelevant.
    pub contribution_amount: f64,
    pub contribution_interval_steps: usize,

    pub root_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            initial_value: 10_000.0,
            horizon_steps: 252,
            num_paths: 1_000,

            use_correlation: true,
            use_fat_tails: true,
            use_garch: true,
            use_regime: true,
            use_jumps: true,

            student_df: 5.0,

            garch_omega: 1e-6,
            garch_alpha: 0.10,
            garch_beta: 0.85,

            regime_p_bull_to_bear: 0.05,
            regime_p_bear_to_bull: 0.10,
            regime_bull_drift_mult: 1.5,
            regime_bull_vol_mult: 0.7,
            regime_bear_drift_mult: -0.5,
            regime_bear_vol_mult: 1.8,

            jump_intensity: 0.02,
            jump_mean: -0.03,
            jump_vol: 0.04,

            path_update_mode: PathUpdateMode::Exponential,

            dividend_yield: 0.0,
            contribution_amount: 0.0,
            contribution_interval_steps: 21,

            root_seed: None,
        }
    }
}

pub fn validate(assets: &[AssetParams], config: &SimulationConfig) -> EngineResult<()> {
    let a = assets.len();
    if a == 0 || a > MAX_ASSETS {
        return Err(EngineError::validation(
            "assets",
            format!("expected 1..={MAX_ASSETS} assets, got {a}"),
        ));
    }

    let weight_sum: f64 = assets.iter().map(|x| x.weight).sum();
    if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(EngineError::validation(
            "assets[].weight",
            format!("weights must sum to 1 (±{WEIGHT_SUM_TOLERANCE}), got {weight_sum}"),
        ));
    }

    for asset in assets {
        if asset.volatility < 0.0 {
            return Err(EngineError::validation(
                "assets[].volatility",
                format!("volatility must be >= 0, got {} for {}", asset.volatility, asset.id),
            ));
        }
    }

    if config.num_paths < MIN_PATHS || config.num_paths > MAX_PATHS {
        return Err(EngineError::validation(
            "config.num_paths",
            format!(
                "expected {MIN_PATHS}..={MAX_PATHS}, got {}",
                config.num_paths
            ),
        ));
    }

    if config.horizon_steps < 1 || config.horizon_steps > MAX_STEPS {
        return Err(EngineError::validation(
            "config.horizon_steps",
            format!("expected 1..={MAX_STEPS}, got {}", config.horizon_steps),
        ));
    }

    if config.initial_value <= 0.0 {
        return Err(EngineError::validation(
            "config.initial_value",
            format!("must be > 0, got {}", config.initial_value),
        ));
    }

    if config.use_fat_tails && config.student_df < 3.0 {
        return Err(EngineError::validation(
            "config.student_df",
            format!("must be >= 3, got {}", config.student_df),
        ));
    }

    let sta = config.num_paths as u64 * config.horizon_steps as u64 * a as u64;
    if sta >= STA_CEILING {
        return Err(EngineError::ResourceLimit {
            actual: sta,
            ceiling: STA_CEILING,
        });
    }

    Ok(())
}

pub fn validate_correlation(matrix: &[Vec<f64>], num_assets: usize) -> EngineResult<()> {
    if matrix.len() != num_assets {
        return Err(EngineError::validation(
            "correlation",
            format!(
                "expected a {num_assets}x{num_assets} matrix, got {} rows",
                matrix.len()
            ),
        ));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != num_assets {
            return Err(EngineError::validation(
                "correlation",
                format!("row {i} has {} columns, expected {num_assets}", row.len()),
            ));
        }
    }
    for i in 0..num_assets {
        for j in 0..num_assets {
            let v = matrix[i][j];
            if !(-1.0..=1.0).contains(&v) {
                return Err(EngineError::validation(
                    "correlation",
                    format!("entry ({i},{j}) = {v} out of [-1, 1]"),
                ));
            }
            if (matrix[i][j] - matrix[j][i]).abs() > 1e-9 {
                return Err(EngineError::validation(
                    "correlation",
                    format!("matrix is not symmetric at ({i},{j})"),
                ));
            }
        }
        if (matrix[i][i] - 1.0).abs() > 1e-9 {
            return Err(EngineError::validation(
                "correlation",
                format!("diagonal entry {i} must be 1, got {}", matrix[i][i]),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, w: f64) -> AssetParams {
        AssetParams {
            id: id.to_string(),
            weight: w,
            mean: 0.0004,
            volatility: 0.01,
        }
    }

    #[test]
    fn rejects_bad_weights() {
        let assets = vec![asset("A", 0.5), asset("B", 0.3)];
        let config = SimulationConfig::default();
        assert!(validate(&assets, &config).is_err());
    }

    #[test]
    fn accepts_valid_portfolio() {
        let assets = vec![asset("A", 0.6), asset("B", 0.4)];
        let config = SimulationConfig::default();
        assert!(validate(&assets, &config).is_ok());
    }

    #[test]
    fn rejects_too_many_assets() {
        let assets: Vec<AssetParams> = (0..25)
            .map(|i| asset(&format!("A{i}"), 1.0 / 25.0))
            .collect();
        let config = SimulationConfig::default();
        assert!(validate(&assets, &config).is_err());
    }

    #[test]
    fn rejects_resource_ceiling() {
        let assets: Vec<AssetParams> = (0..20)
            .map(|i| asset(&format!("A{i}"), 1.0 / 20.0))
            .collect();
        let mut config = SimulationConfig::default();
        config.num_paths = MAX_PATHS;
        config.horizon_steps = MAX_STEPS;
        assert!(matches!(
            validate(&assets, &config),
            Err(EngineError::ResourceLimit { .. })
        ));
    }
}
