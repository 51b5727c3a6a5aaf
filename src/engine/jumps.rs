//! Merton jump diffusion layer (spec.md §4.6): a Bernoulli-gated Gaussian
//! shock added additively to a per-asset log-return.

use crate::engine::config::SimulationConfig;
use crate::engine::rng::StochasticRng;

#[inline]
pub fn draw(rng: &mut StochasticRng, cfg: &SimulationConfig) -> f64 {
    if rng.bernoulli(cfg.jump_intensity) {
        rng.gaussian(cfg.jump_mean, cfg.jump_vol)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_intensity_never_jumps() {
        let mut rng = StochasticRng::from_seed(1);
        let mut cfg = SimulationConfig::default();
        cfg.jump_intensity = 0.0;
        for _ in 0..1000 {
            assert_eq!(draw(&mut rng, &cfg), 0.0);
        }
    }

    #[test]
    fn full_intensity_always_jumps() {
        let mut rng = StochasticRng::from_seed(1);
        let mut cfg = SimulationConfig::default();
        cfg.jump_intensity = 1.0;
        let mut any_nonzero = false;
        for _ in 0..100 {
            if draw(&mut rng, &cfg) != 0.0 {
                any_nonzero = true;
            }
        }
        assert!(any_nonzero);
    }
}
