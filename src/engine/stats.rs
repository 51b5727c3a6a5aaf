//! Statistics & drawdown (spec.md §4.8): percentiles, Sharpe/VaR/ES,
//! skewness/kurtosis, drawdown aggregates, fan chart, representative path
//! sampling, and goal-attainment queries.

use crate::engine::result::{Drawdowns, FanPoint, GoalReport, Metrics, Percentiles};

const TRADING_DAYS_PER_YEAR: f64 = 252.0;
const RISK_FREE_ANNUAL: f64 = 0.04;

/// Type-7 (linear interpolation between order statistics) percentile of
/// already-sorted data, `p` in `[0, 100]`.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + frac * (sorted[hi] - sorted[lo])
    }
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn stdev(xs: &[f64], mu: f64) -> f64 {
    (xs.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
}

pub fn compute_percentiles(final_values: &[f64]) -> Percentiles {
    let mut sorted = final_values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    Percentiles {
        p5: percentile_sorted(&sorted, 5.0),
        p10: percentile_sorted(&sorted, 10.0),
        p25: percentile_sorted(&sorted, 25.0),
        p50: percentile_sorted(&sorted, 50.0),
        p75: percentile_sorted(&sorted, 75.0),
        p90: percentile_sorted(&sorted, 90.0),
        p95: percentile_sorted(&sorted, 95.0),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean: mean(&sorted),
    }
}

/// `metrics` over simple returns `(final - V0) / V0` (spec.md §4.8).
pub fn compute_metrics(final_values: &[f64], initial_value: f64, horizon_steps: usize) -> Metrics {
    let simple_returns: Vec<f64> = final_values
        .iter()
        .map(|v| (v - initial_value) / initial_value)
        .collect();

    let mu = mean(&simple_returns);
    let sigma = stdev(&simple_returns, mu);

    let rf_scaled = RISK_FREE_ANNUAL / TRADING_DAYS_PER_YEAR * horizon_steps as f64;
    let sharpe = if sigma > 0.0 {
        (mu - rf_scaled) / sigma
    } else {
        0.0
    };

    let mut sorted_returns = simple_returns.clone();
    sorted_returns.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let var_5 = percentile_sorted(&sorted_returns, 5.0);
    let var_1 = percentile_sorted(&sorted_returns, 1.0);

    let tail: Vec<f64> = sorted_returns
        .iter()
        .copied()
        .filter(|r| *r <= var_5)
        .collect();
    let es_5 = if tail.is_empty() { var_5 } else { mean(&tail) };

    let m2 = simple_returns.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / simple_returns.len() as f64;
    let m3 = simple_returns.iter().map(|x| (x - mu).powi(3)).sum::<f64>() / simple_returns.len() as f64;
    let m4 = simple_returns.iter().map(|x| (x - mu).powi(4)).sum::<f64>() / simple_returns.len() as f64;
    let skewness = if m2 > 0.0 { m3 / m2.powf(1.5) } else { 0.0 };
    let kurtosis = if m2 > 0.0 { m4 / m2.powi(2) } else { 0.0 };

    let prob_profit = simple_returns.iter().filter(|r| **r > 0.0).count() as f64
        / simple_returns.len() as f64;

    Metrics {
        mean_return_pct: mu * 100.0,
        volatility_pct: sigma * 100.0,
        sharpe_ratio: sharpe,
        var_5_pct: var_5 * 100.0,
        var_1_pct: var_1 * 100.0,
        expected_shortfall_5_pct: es_5 * 100.0,
        skewness,
        kurtosis,
        prob_profit_pct: prob_profit * 100.0,
    }
}

/// Per-path maximum drawdown: `min_t (P_t - running_max_t) / running_max_t`.
pub fn max_drawdown(path: &[f64]) -> f64 {
    let mut running_max = path[0];
    let mut worst = 0.0_f64;
    for &v in path {
        if v > running_max {
            running_max = v;
        }
        let dd = (v - running_max) / running_max;
        if dd < worst {
            worst = dd;
        }
    }
    worst
}

pub fn compute_drawdowns(paths: &[Vec<f64>]) -> Drawdowns {
    let mut dds: Vec<f64> = paths.iter().map(|p| max_drawdown(p)).collect();
    dds.sort_by(|a, b| a.partial_cmp(b).unwrap());
    Drawdowns {
        median_pct: percentile_sorted(&dds, 50.0) * 100.0,
        p10_worst_pct: percentile_sorted(&dds, 10.0) * 100.0,
        p5_worst_pct: percentile_sorted(&dds, 5.0) * 100.0,
        worst_pct: dds[0] * 100.0,
        mean_pct: mean(&dds) * 100.0,
    }
}

/// Percentile bands over time, sampled at `max(1, floor(T/50))` strides
/// (spec.md §4.8).
pub fn compute_fan_chart(paths: &[Vec<f64>], horizon_steps: usize) -> Vec<FanPoint> {
    let stride = (horizon_steps / 50).max(1);
    let mut points = Vec::new();
    let mut step = 0;
    while step <= horizon_steps {
        let mut column: Vec<f64> = paths.iter().map(|p| p[step]).collect();
        column.sort_by(|a, b| a.partial_cmp(b).unwrap());
        points.push(FanPoint {
            step,
            p10: percentile_sorted(&column, 10.0),
            p25: percentile_sorted(&column, 25.0),
            p50: percentile_sorted(&column, 50.0),
            p75: percentile_sorted(&column, 75.0),
            p90: percentile_sorted(&column, 90.0),
        });
        step += stride;
    }
    points
}

/// 10 representative paths: sort by final value, then pick 10 equally
/// spaced quantile positions (spec.md §9 "Representative path sampling" —
/// a deliberate departure from the original source's raw-index sampling).
pub fn sample_representative_paths(paths: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = paths.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| paths[a].last().unwrap().partial_cmp(paths[b].last().unwrap()).unwrap());

    const SAMPLE_COUNT: usize = 10;
    let count = SAMPLE_COUNT.min(n);
    (0..count)
        .map(|k| {
            let pos = if count == 1 {
                0
            } else {
                (k * (n - 1)) / (count - 1)
            };
            paths[order[pos]].clone()
        })
        .collect()
}

pub fn goal_probability(
    final_values: &[f64],
    paths: &[Vec<f64>],
    target: f64,
) -> GoalReport {
    let success_count = final_values.iter().filter(|v| **v >= target).count();
    let total = final_values.len();
    let probability = success_count as f64 / total as f64 * 100.0;

    let horizon_steps = paths[0].len();
    let mut median_crossing_day = None;
    for step in 0..horizon_steps {
        let mut column: Vec<f64> = paths.iter().map(|p| p[step]).collect();
        column.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = percentile_sorted(&column, 50.0);
        if median >= target {
            median_crossing_day = Some(step);
            break;
        }
    }

    GoalReport {
        probability_pct: probability,
        success_count,
        total_simulations: total,
        target_value: target,
        median_crossing_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_monotone() {
        let mut sorted: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let ps: Vec<f64> = [5.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0]
            .iter()
            .map(|p| percentile_sorted(&sorted, *p))
            .collect();
        for w in ps.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn drawdown_is_non_positive_and_bounded() {
        // peak 110, trough 50 -> drawdown = (50-110)/110
        let path = vec![100.0, 110.0, 90.0, 95.0, 50.0, 80.0];
        let dd = max_drawdown(&path);
        assert!(dd <= 0.0);
        assert!(dd >= -1.0);
        assert!((dd - (50.0 - 110.0) / 110.0).abs() < 1e-9);
    }

    #[test]
    fn flat_path_has_zero_drawdown() {
        let path = vec![100.0; 10];
        assert_eq!(max_drawdown(&path), 0.0);
    }

    #[test]
    fn representative_paths_span_distribution() {
        let paths: Vec<Vec<f64>> = (0..100).map(|i| vec![i as f64, i as f64 + 1.0]).collect();
        let sample = sample_representative_paths(&paths);
        assert_eq!(sample.len(), 10);
        // first sample should be near the minimum, last near the maximum
        assert!(sample[0][0] < 10.0);
        assert!(sample[9][0] > 89.0);
    }

    #[test]
    fn goal_probability_monotone_in_target() {
        let final_values: Vec<f64> = (0..1000).map(|i| 9000.0 + i as f64 * 2.0).collect();
        let paths: Vec<Vec<f64>> = final_values.iter().map(|v| vec![10000.0, *v]).collect();
        let low = goal_probability(&final_values, &paths, 9500.0);
        let high = goal_probability(&final_values, &paths, 10500.0);
        assert!(low.probability_pct >= high.probability_pct);
    }
}
