//! Python-facing facade. Follows the teacher crate's idiom of `#[pyclass]`
//! structs with `#[new]` constructors and `#[pyo3(get)]` fields (see
//! `GeometricBrownianMotion`, `OptionGreeks` in the teacher), but — unlike
//! the teacher's `assert!`-and-panic constructors — invalid input here is
//! reported as a `PyValueError`/`PyRuntimeError`, matching the one place the
//! teacher itself does this (`vectorized.rs`'s length-mismatch check).

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::engine;
use crate::error::EngineError;

fn to_py_err(err: EngineError) -> PyErr {
    match err {
        EngineError::Validation { .. } => PyValueError::new_err(err.to_string()),
        EngineError::Numeric(_) | EngineError::ResourceLimit { .. } => {
            PyRuntimeError::new_err(err.to_string())
        }
    }
}

/// One asset's simulation parameters (spec.md §3).
#[pyclass]
#[derive(Clone, Debug)]
pub struct AssetInput {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub weight: f64,
    #[pyo3(get, set)]
    pub mean: f64,
    #[pyo3(get, set)]
    pub volatility: f64,
}

#[pymethods]
impl AssetInput {
    #[new]
    pub fn new(id: String, weight: f64, mean: f64, volatility: f64) -> Self {
        AssetInput {
            id,
            weight,
            mean,
            volatility,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "AssetInput(id={:?}, weight={}, mean={}, volatility={})",
            self.id, self.weight, self.mean, self.volatility
        )
    }
}

impl From<&AssetInput> for engine::AssetParams {
    fn from(a: &AssetInput) -> Self {
        engine::AssetParams {
            id: a.id.clone(),
            weight: a.weight,
            mean: a.mean,
            volatility: a.volatility,
        }
    }
}

/// Explicit configuration record (spec.md §9 "Dynamic config objects").
/// Every toggle and tunable constant named in the spec has a field here and
/// a default matching spec.md §4's defaults; there is no loose option bag.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    #[pyo3(get, set)]
    pub initial_value: f64,
    #[pyo3(get, set)]
    pub horizon_steps: usize,
    #[pyo3(get, set)]
    pub num_paths: usize,
    #[pyo3(get, set)]
    pub use_correlation: bool,
    #[pyo3(get, set)]
    pub use_fat_tails: bool,
    #[pyo3(get, set)]
    pub use_garch: bool,
    #[pyo3(get, set)]
    pub use_regime: bool,
    #[pyo3(get, set)]
    pub use_jumps: bool,
    #[pyo3(get, set)]
    pub student_df: f64,
    #[pyo3(get, set)]
    pub garch_omega: f64,
    #[pyo3(get, set)]
    pub garch_alpha: f64,
    #[pyo3(get, set)]
    pub garch_beta: f64,
    #[pyo3(get, set)]
    pub regime_p_bull_to_bear: f64,
    #[pyo3(get, set)]
    pub regime_p_bear_to_bull: f64,
    #[pyo3(get, set)]
    pub regime_bull_drift_mult: f64,
    #[pyo3(get, set)]
    pub regime_bull_vol_mult: f64,
    #[pyo3(get, set)]
    pub regime_bear_drift_mult: f64,
    #[pyo3(get, set)]
    pub regime_bear_vol_mult: f64,
    #[pyo3(get, set)]
    pub jump_intensity: f64,
    #[pyo3(get, set)]
    pub jump_mean: f64,
    #[pyo3(get, set)]
    pub jump_vol: f64,
    #[pyo3(get, set)]
    pub use_additive_path_update: bool,
    #[pyo3(get, set)]
    pub dividend_yield: f64,
    #[pyo3(get, set)]
    pub contribution_amount: f64,
    #[pyo3(get, set)]
    pub contribution_interval_steps: usize,
    #[pyo3(get, set)]
    pub seed: Option<u64>,
}

#[pymethods]
impl SimulationConfig {
    /// All arguments optional; unlisted toggles default "on" for the
    /// advanced models, per spec.md §4.1.
    #[new]
    #[pyo3(signature = (
        initial_value=10_000.0,
        horizon_steps=252,
        num_paths=1_000,
        use_correlation=true,
        use_fat_tails=true,
        use_garch=true,
        use_regime=true,
        use_jumps=true,
        student_df=5.0,
        seed=None,
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        initial_value: f64,
        horizon_steps: usize,
        num_paths: usize,
        use_correlation: bool,
        use_fat_tails: bool,
        use_garch: bool,
        use_regime: bool,
        use_jumps: bool,
        student_df: f64,
        seed: Option<u64>,
    ) -> Self {
        let defaults = engine::SimulationConfig::default();
        SimulationConfig {
            initial_value,
            horizon_steps,
            num_paths,
            use_correlation,
            use_fat_tails,
            use_garch,
            use_regime,
            use_jumps,
            student_df,
            garch_omega: defaults.garch_omega,
            garch_alpha: defaults.garch_alpha,
            garch_beta: defaults.garch_beta,
            regime_p_bull_to_bear: defaults.regime_p_bull_to_bear,
            regime_p_bear_to_bull: defaults.regime_p_bear_to_bull,
            regime_bull_drift_mult: defaults.regime_bull_drift_mult,
            regime_bull_vol_mult: defaults.regime_bull_vol_mult,
            regime_bear_drift_mult: defaults.regime_bear_drift_mult,
            regime_bear_vol_mult: defaults.regime_bear_vol_mult,
            jump_intensity: defaults.jump_intensity,
            jump_mean: defaults.jump_mean,
            jump_vol: defaults.jump_vol,
            use_additive_path_update: false,
            dividend_yield: defaults.dividend_yield,
            contribution_amount: defaults.contribution_amount,
            contribution_interval_steps: defaults.contribution_interval_steps,
            seed,
        }
    }
}

impl From<&SimulationConfig> for engine::SimulationConfig {
    fn from(c: &SimulationConfig) -> Self {
        engine::SimulationConfig {
            initial_value: c.initial_value,
            horizon_steps: c.horizon_steps,
            num_paths: c.num_paths,
            use_correlation: c.use_correlation,
            use_fat_tails: c.use_fat_tails,
            use_garch: c.use_garch,
            use_regime: c.use_regime,
            use_jumps: c.use_jumps,
            student_df: c.student_df,
            garch_omega: c.garch_omega,
            garch_alpha: c.garch_alpha,
            garch_beta: c.garch_beta,
            regime_p_bull_to_bear: c.regime_p_bull_to_bear,
            regime_p_bear_to_bull: c.regime_p_bear_to_bull,
            regime_bull_drift_mult: c.regime_bull_drift_mult,
            regime_bull_vol_mult: c.regime_bull_vol_mult,
            regime_bear_drift_mult: c.regime_bear_drift_mult,
            regime_bear_vol_mult: c.regime_bear_vol_mult,
            jump_intensity: c.jump_intensity,
            jump_mean: c.jump_mean,
            jump_vol: c.jump_vol,
            path_update_mode: if c.use_additive_path_update {
                engine::PathUpdateMode::Additive
            } else {
                engine::PathUpdateMode::Exponential
            },
            dividend_yield: c.dividend_yield,
            contribution_amount: c.contribution_amount,
            contribution_interval_steps: c.contribution_interval_steps,
            root_seed: c.seed,
        }
    }
}

#[pyclass]
#[derive(Clone, Debug)]
pub struct Metrics {
    #[pyo3(get)]
    pub mean_return_pct: f64,
    #[pyo3(get)]
    pub volatility_pct: f64,
    #[pyo3(get)]
    pub sharpe_ratio: f64,
    #[pyo3(get)]
    pub var_5_pct: f64,
    #[pyo3(get)]
    pub var_1_pct: f64,
    #[pyo3(get)]
    pub expected_shortfall_5_pct: f64,
    #[pyo3(get)]
    pub skewness: f64,
    #[pyo3(get)]
    pub kurtosis: f64,
    #[pyo3(get)]
    pub prob_profit_pct: f64,
}

impl From<engine::Metrics> for Metrics {
    fn from(m: engine::Metrics) -> Self {
        Metrics {
            mean_return_pct: m.mean_return_pct,
            volatility_pct: m.volatility_pct,
            sharpe_ratio: m.sharpe_ratio,
            var_5_pct: m.var_5_pct,
            var_1_pct: m.var_1_pct,
            expected_shortfall_5_pct: m.expected_shortfall_5_pct,
            skewness: m.skewness,
            kurtosis: m.kurtosis,
            prob_profit_pct: m.prob_profit_pct,
        }
    }
}

#[pyclass]
#[derive(Clone, Debug)]
pub struct Percentiles {
    #[pyo3(get)]
    pub p5: f64,
    #[pyo3(get)]
    pub p10: f64,
    #[pyo3(get)]
    pub p25: f64,
    #[pyo3(get)]
    pub p50: f64,
    #[pyo3(get)]
    pub p75: f64,
    #[pyo3(get)]
    pub p90: f64,
    #[pyo3(get)]
    pub p95: f64,
    #[pyo3(get)]
    pub min: f64,
    #[pyo3(get)]
    pub max: f64,
    #[pyo3(get)]
    pub mean: f64,
}

impl From<engine::Percentiles> for Percentiles {
    fn from(p: engine::Percentiles) -> Self {
        Percentiles {
            p5: p.p5,
            p10: p.p10,
            p25: p.p25,
            p50: p.p50,
            p75: p.p75,
            p90: p.p90,
            p95: p.p95,
            min: p.min,
            max: p.max,
            mean: p.mean,
        }
    }
}

#[pyclass]
#[derive(Clone, Debug)]
pub struct Drawdowns {
    #[pyo3(get)]
    pub median_pct: f64,
    #[pyo3(get)]
    pub p10_worst_pct: f64,
    #[pyo3(get)]
    pub p5_worst_pct: f64,
    #[pyo3(get)]
    pub worst_pct: f64,
    #[pyo3(get)]
    pub mean_pct: f64,
}

impl From<engine::Drawdowns> for Drawdowns {
    fn from(d: engine::Drawdowns) -> Self {
        Drawdowns {
            median_pct: d.median_pct,
            p10_worst_pct: d.p10_worst_pct,
            p5_worst_pct: d.p5_worst_pct,
            worst_pct: d.worst_pct,
            mean_pct: d.mean_pct,
        }
    }
}

#[pyclass]
#[derive(Clone, Debug)]
pub struct FanPoint {
    #[pyo3(get)]
    pub step: usize,
    #[pyo3(get)]
    pub p10: f64,
    #[pyo3(get)]
    pub p25: f64,
    #[pyo3(get)]
    pub p50: f64,
    #[pyo3(get)]
    pub p75: f64,
    #[pyo3(get)]
    pub p90: f64,
}

impl From<engine::FanPoint> for FanPoint {
    fn from(f: engine::FanPoint) -> Self {
        FanPoint {
            step: f.step,
            p10: f.p10,
            p25: f.p25,
            p50: f.p50,
            p75: f.p75,
            p90: f.p90,
        }
    }
}

#[pyclass]
#[derive(Clone)]
pub struct SimulationResult {
    #[pyo3(get)]
    pub final_values: Vec<f64>,
    #[pyo3(get)]
    pub metrics: Metrics,
    #[pyo3(get)]
    pub percentiles: Percentiles,
    #[pyo3(get)]
    pub drawdowns: Drawdowns,
    #[pyo3(get)]
    pub fan_chart: Vec<FanPoint>,
    #[pyo3(get)]
    pub sample_paths: Vec<Vec<f64>>,
    inner: engine::SimulationResult,
}

#[pymethods]
impl SimulationResult {
    /// Full `(S, T+1)` path tensor. Not a plain getter since a caller that
    /// only wants summary statistics shouldn't pay to copy it by accident
    /// (spec.md §4.1: "may be withheld from serialization").
    fn get_paths(&self) -> Vec<Vec<f64>> {
        self.inner.paths.clone()
    }
}

impl From<engine::SimulationResult> for SimulationResult {
    fn from(r: engine::SimulationResult) -> Self {
        SimulationResult {
            final_values: r.final_values.clone(),
            metrics: r.metrics.clone().into(),
            percentiles: r.percentiles.clone().into(),
            drawdowns: r.drawdowns.clone().into(),
            fan_chart: r.fan_chart.iter().cloned().map(Into::into).collect(),
            sample_paths: r.sample_paths.clone(),
            inner: r,
        }
    }
}

#[pyclass]
#[derive(Clone, Debug)]
pub struct GoalReport {
    #[pyo3(get)]
    pub probability_pct: f64,
    #[pyo3(get)]
    pub success_count: usize,
    #[pyo3(get)]
    pub total_simulations: usize,
    #[pyo3(get)]
    pub target_value: f64,
    #[pyo3(get)]
    pub median_crossing_day: Option<usize>,
}

impl From<engine::GoalReport> for GoalReport {
    fn from(g: engine::GoalReport) -> Self {
        GoalReport {
            probability_pct: g.probability_pct,
            success_count: g.success_count,
            total_simulations: g.total_simulations,
            target_value: g.target_value,
            median_crossing_day: g.median_crossing_day,
        }
    }
}

/// Run the Monte Carlo portfolio simulation (spec.md §4.1). `correlation`,
/// if given, is a row-major `A x A` symmetric matrix with unit diagonal;
/// when omitted and correlation is enabled the engine synthesizes one from
/// coarse asset-class tags (spec.md §4.2).
#[pyfunction]
#[pyo3(signature = (assets, config, correlation=None))]
pub fn simulate(
    assets: Vec<AssetInput>,
    config: SimulationConfig,
    correlation: Option<Vec<Vec<f64>>>,
) -> PyResult<SimulationResult> {
    let engine_assets: Vec<engine::AssetParams> = assets.iter().map(Into::into).collect();
    let engine_config: engine::SimulationConfig = (&config).into();
    let result = engine::simulate(&engine_assets, &engine_config, correlation.as_deref())
        .map_err(to_py_err)?;
    Ok(result.into())
}

/// `P(final >= target)`, success count, and the first step at which the
/// elementwise median path reaches `target` (spec.md §4.1).
#[pyfunction]
pub fn goal_probability(result: &SimulationResult, target: f64) -> GoalReport {
    engine::goal_probability(&result.inner, target).into()
}
