//! Innovation generation and correlation application (spec.md §4.3).
//!
//! The main integrator streams one (path, step) asset-vector at a time
//! rather than materializing the full `(S,T,A)` tensor — at the spec's
//! resource ceiling that tensor alone would be tens of gigabytes. `generate_tensor`
//! below is kept as a standalone, directly testable version of the same
//! math for callers who want the full tensor at small scale (and for the
//! property tests that check its shape/distribution in isolation).

use nalgebra::DMatrix;

use crate::engine::rng::StochasticRng;
use crate::engine::tensor::Tensor3;

#[inline]
pub fn draw_raw_into(rng: &mut StochasticRng, use_fat_tails: bool, df: f64, out: &mut [f64]) {
    for slot in out.iter_mut() {
        *slot = if use_fat_tails {
            rng.student_t(df)
        } else {
            rng.normal()
        };
    }
}

/// `out = L * raw`, applying the Cholesky factor to induce correlation.
#[inline]
pub fn correlate_into(l: &DMatrix<f64>, raw: &[f64], out: &mut [f64]) {
    let a = raw.len();
    for i in 0..a {
        let mut acc = 0.0;
        for j in 0..=i {
            acc += l[(i, j)] * raw[j];
        }
        out[i] = acc;
    }
}

/// Full `(S,T,A)` innovation tensor, for isolated testing / small-scale use.
pub fn generate_tensor(
    rng: &mut StochasticRng,
    s: usize,
    t: usize,
    a: usize,
    use_fat_tails: bool,
    df: f64,
    correlation_l: Option<&DMatrix<f64>>,
) -> Tensor3 {
    let mut tensor = Tensor3::zeros(s, t, a);
    let mut raw = vec![0.0; a];
    let mut correlated = vec![0.0; a];
    for si in 0..s {
        for ti in 0..t {
            draw_raw_into(rng, use_fat_tails, df, &mut raw);
            let slot = tensor.step_slice_mut(si, ti);
            if let Some(l) = correlation_l {
                correlate_into(l, &raw, &mut correlated);
                slot.copy_from_slice(&correlated);
            } else {
                slot.copy_from_slice(&raw);
            }
        }
    }
    tensor
}
