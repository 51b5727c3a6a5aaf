//! End-to-end scenarios S1–S6 (spec.md §8), run against the pure-Rust core.

use portfolio_monte_carlo::engine::{goal_probability, simulate, AssetParams, SimulationConfig};

fn asset(id: &str, weight: f64, mean: f64, volatility: f64) -> AssetParams {
    AssetParams {
        id: id.to_string(),
        weight,
        mean,
        volatility,
    }
}

/// S1 — single asset, zero vol, every toggle off. Initializes a `tracing`
/// subscriber so the `debug!`/`warn!` spans emitted by `engine::simulate`
/// and `engine::correlation` show up under `cargo test -- --nocapture`.
#[test]
fn s1_single_asset_zero_vol() {
    let _ = tracing_subscriber::fmt::try_init();

    let assets = vec![asset("CASH", 1.0, 0.0004, 0.0)];
    let config = SimulationConfig {
        num_paths: 1_000,
        horizon_steps: 252,
        use_correlation: false,
        use_fat_tails: false,
        use_garch: false,
        use_regime: false,
        use_jumps: false,
        root_seed: Some(1),
        ..SimulationConfig::default()
    };
    let result = simulate(&assets, &config, None).unwrap();

    let expected = 10_000.0 * (0.0004_f64 * 252.0).exp();
    assert!((result.percentiles.mean - expected).abs() < 1e-6);
    assert!((result.percentiles.max - result.percentiles.min).abs() < 1e-6);
    assert_eq!(result.metrics.sharpe_ratio, 0.0);
}

/// S2 — two-asset 60/40, only correlation on.
#[test]
fn s2_two_asset_sixty_forty() {
    let assets = vec![
        asset("SPY", 0.6, 0.0004, 0.012),
        asset("BND", 0.4, 0.0001, 0.004),
    ];
    let config = SimulationConfig {
        num_paths: 5_000,
        horizon_steps: 252,
        use_correlation: true,
        use_fat_tails: false,
        use_garch: false,
        use_regime: false,
        use_jumps: false,
        root_seed: Some(2),
        ..SimulationConfig::default()
    };
    let correlation = vec![vec![1.0, -0.2], vec![-0.2, 1.0]];
    let result = simulate(&assets, &config, Some(correlation.as_slice())).unwrap();

    assert!(
        (10_600.0..=10_900.0).contains(&result.percentiles.mean),
        "mean {} outside band",
        result.percentiles.mean
    );
    assert!(
        (55.0..=75.0).contains(&result.metrics.prob_profit_pct),
        "prob_profit {} outside band",
        result.metrics.prob_profit_pct
    );
    assert!(
        (-12.0..=-4.0).contains(&result.drawdowns.median_pct),
        "median drawdown {} outside band",
        result.drawdowns.median_pct
    );
}

/// S3 — fat-tail + jump stress on the same portfolio as S2. VaR_5 should be
/// worse (more negative) than S2's by at least one percentage point, and
/// kurtosis should exceed 3.5.
#[test]
fn s3_fat_tail_stress_worse_than_s2() {
    let assets = vec![
        asset("SPY", 0.6, 0.0004, 0.012),
        asset("BND", 0.4, 0.0001, 0.004),
    ];
    let correlation = vec![vec![1.0, -0.2], vec![-0.2, 1.0]];

    let s2_config = SimulationConfig {
        num_paths: 5_000,
        horizon_steps: 252,
        use_correlation: true,
        use_fat_tails: false,
        use_garch: false,
        use_regime: false,
        use_jumps: false,
        root_seed: Some(3),
        ..SimulationConfig::default()
    };
    let s2 = simulate(&assets, &s2_config, Some(correlation.as_slice())).unwrap();

    let s3_config = SimulationConfig {
        use_fat_tails: true,
        student_df: 5.0,
        use_jumps: true,
        jump_intensity: 0.02,
        jump_mean: -0.03,
        jump_vol: 0.04,
        ..s2_config
    };
    let s3 = simulate(&assets, &s3_config, Some(correlation.as_slice())).unwrap();

    assert!(
        s3.metrics.var_5_pct <= s2.metrics.var_5_pct - 1.0,
        "s3 VaR_5 {} not worse than s2 {} by >= 1pp",
        s3.metrics.var_5_pct,
        s2.metrics.var_5_pct
    );
    assert!(
        s3.metrics.kurtosis > 3.5,
        "kurtosis {} not > 3.5",
        s3.metrics.kurtosis
    );
}

/// S4 — goal query well above the mean path: low probability, no median crossing.
#[test]
fn s4_goal_query_unreachable_target() {
    let assets = vec![
        asset("SPY", 0.6, 0.0004, 0.012),
        asset("BND", 0.4, 0.0001, 0.004),
    ];
    let config = SimulationConfig {
        num_paths: 5_000,
        horizon_steps: 252,
        use_correlation: true,
        use_fat_tails: false,
        use_garch: false,
        use_regime: false,
        use_jumps: false,
        root_seed: Some(4),
        ..SimulationConfig::default()
    };
    let correlation = vec![vec![1.0, -0.2], vec![-0.2, 1.0]];
    let result = simulate(&assets, &config, Some(correlation.as_slice())).unwrap();
    let report = goal_probability(&result, 15_000.0);

    assert!(report.probability_pct < 5.0, "{}", report.probability_pct);
    assert!(report.median_crossing_day.is_none());
}

/// S5 — goal query near the mean: moderate probability, crossing found within horizon.
#[test]
fn s5_goal_query_near_mean() {
    let assets = vec![
        asset("SPY", 0.6, 0.0004, 0.012),
        asset("BND", 0.4, 0.0001, 0.004),
    ];
    let config = SimulationConfig {
        num_paths: 5_000,
        horizon_steps: 252,
        use_correlation: true,
        use_fat_tails: false,
        use_garch: false,
        use_regime: false,
        use_jumps: false,
        root_seed: Some(5),
        ..SimulationConfig::default()
    };
    let correlation = vec![vec![1.0, -0.2], vec![-0.2, 1.0]];
    let result = simulate(&assets, &config, Some(correlation.as_slice())).unwrap();
    let report = goal_probability(&result, 10_500.0);

    assert!(
        (45.0..=65.0).contains(&report.probability_pct),
        "{}",
        report.probability_pct
    );
    match report.median_crossing_day {
        Some(day) => assert!(day >= 1 && day <= config.horizon_steps),
        None => panic!("expected a median crossing day within the horizon"),
    }
}

/// S6 — regime switching alone, zero drift/vol inputs: mean should stay
/// close to V0 (bounded, not exactly equal — the spec only asserts
/// boundedness here).
#[test]
fn s6_regime_dominance_is_bounded() {
    let assets = vec![
        asset("A", 0.5, 0.0, 0.01),
        asset("B", 0.5, 0.0, 0.01),
    ];
    let config = SimulationConfig {
        num_paths: 5_000,
        horizon_steps: 252,
        use_correlation: false,
        use_fat_tails: false,
        use_garch: false,
        use_regime: true,
        use_jumps: false,
        root_seed: Some(6),
        ..SimulationConfig::default()
    };
    let result = simulate(&assets, &config, None).unwrap();

    let lower = config.initial_value * 0.97;
    let upper = config.initial_value * 1.03;
    assert!(
        (lower..=upper).contains(&result.percentiles.mean),
        "mean {} outside +-3% band",
        result.percentiles.mean
    );
}
