//! GARCH(1,1) conditional volatility (spec.md §4.4).
//!
//! `h_t = omega + alpha * (x_{t-1} * sigma_a)^2 + beta * h_{t-1}`, driven by
//! the *uncorrelated* raw innovation `x`, deliberately bypassing the
//! correlation factor even when correlation is enabled elsewhere (spec.md
//! §4.4 note) so each asset's unconditional variance contract is preserved.

use crate::engine::config::SimulationConfig;

pub struct GarchState {
    variance: Vec<f64>,
}

impl GarchState {
    pub fn new(base_vol: &[f64]) -> Self {
        GarchState {
            variance: base_vol.iter().map(|v| v * v).collect(),
        }
    }

    #[inline]
    pub fn vol(&self, asset: usize) -> f64 {
        self.variance[asset].sqrt()
    }

    /// Advance variance for the next step using this step's raw shock.
    pub fn step(&mut self, raw_shocks: &[f64], base_vol: &[f64], cfg: &SimulationConfig) {
        for a in 0..self.variance.len() {
            let shock_sq = (raw_shocks[a] * base_vol[a]).powi(2);
            self.variance[a] =
                cfg.garch_omega + cfg.garch_alpha * shock_sq + cfg.garch_beta * self.variance[a];
        }
    }
}
