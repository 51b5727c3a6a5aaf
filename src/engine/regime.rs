//! Two-state Markov regime switch (spec.md §4.5).
//!
//! One regime per path per step, broadcast across assets. `R[s,0] = Bull`;
//! transitions are driven by an independent uniform draw per step.

use crate::engine::config::SimulationConfig;
use crate::engine::tensor::Regime;

pub struct RegimeModel {
    regime: Regime,
}

impl RegimeModel {
    pub fn new() -> Self {
        RegimeModel {
            regime: Regime::Bull,
        }
    }

    pub fn current(&self) -> Regime {
        self.regime
    }

    /// (drift_multiplier, vol_multiplier) for the current regime.
    pub fn multipliers(&self, cfg: &SimulationConfig) -> (f64, f64) {
        match self.regime {
            Regime::Bull => (cfg.regime_bull_drift_mult, cfg.regime_bull_vol_mult),
            Regime::Bear => (cfg.regime_bear_drift_mult, cfg.regime_bear_vol_mult),
        }
    }

    /// Advance to the next step's regime given a fresh Uniform(0,1) draw.
    pub fn advance(&mut self, u: f64, cfg: &SimulationConfig) {
        self.regime = match self.regime {
            Regime::Bull => {
                if u < cfg.regime_p_bull_to_bear {
                    Regime::Bear
                } else {
                    Regime::Bull
                }
            }
            Regime::Bear => {
                if u < cfg.regime_p_bear_to_bull {
                    Regime::Bull
                } else {
                    Regime::Bear
                }
            }
        };
    }
}

impl Default for RegimeModel {
    fn default() -> Self {
        RegimeModel::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_bull() {
        let r = RegimeModel::new();
        assert_eq!(r.current(), Regime::Bull);
    }

    #[test]
    fn bull_stays_bull_on_high_uniform() {
        let mut r = RegimeModel::new();
        let cfg = SimulationConfig::default();
        r.advance(0.99, &cfg);
        assert_eq!(r.current(), Regime::Bull);
    }

    #[test]
    fn bull_flips_to_bear_on_low_uniform() {
        let mut r = RegimeModel::new();
        let cfg = SimulationConfig::default();
        r.advance(0.001, &cfg);
        assert_eq!(r.current(), Regime::Bear);
    }

    #[test]
    fn bear_flips_to_bull_on_low_uniform() {
        let mut r = RegimeModel::new();
        let cfg = SimulationConfig::default();
        r.advance(0.001, &cfg); // -> Bear
        r.advance(0.05, &cfg); // < p_bear_to_bull (0.10) -> Bull
        assert_eq!(r.current(), Regime::Bull);
    }
}
