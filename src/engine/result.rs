//! Output record types (spec.md §4.1, §6). Plain Rust + `serde`, with no
//! `pyo3` dependency — the `facade` module wraps these for Python callers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    pub mean_return_pct: f64,
    pub volatility_pct: f64,
    pub sharpe_ratio: f64,
    pub var_5_pct: f64,
    pub var_1_pct: f64,
    pub expected_shortfall_5_pct: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub prob_profit_pct: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Percentiles {
    pub p5: f64,
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Drawdowns {
    pub median_pct: f64,
    pub p10_worst_pct: f64,
    pub p5_worst_pct: f64,
    pub worst_pct: f64,
    pub mean_pct: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FanPoint {
    pub step: usize,
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    /// Full `(S, T+1)` value-path tensor, row-major by path. Always held
    /// internally for derived statistics; callers that don't need the raw
    /// paths can ignore this field (or the facade can withhold it from
    /// serialization — see `facade::SimulationResult`).
    pub paths: Vec<Vec<f64>>,
    pub final_values: Vec<f64>,
    pub metrics: Metrics,
    pub percentiles: Percentiles,
    pub drawdowns: Drawdowns,
    pub fan_chart: Vec<FanPoint>,
    pub sample_paths: Vec<Vec<f64>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalReport {
    pub probability_pct: f64,
    pub success_count: usize,
    pub total_simulations: usize,
    pub target_value: f64,
    pub median_crossing_day: Option<usize>,
}
