//! Flat, row-major tensors over (simulations, time, assets).
//!
//! A is the innermost axis so per-step vector ops over assets are
//! contiguous; S is outermost so a path-level parallel split (rayon,
//! chunked over S) touches disjoint contiguous regions.

#[derive(Clone, Debug)]
pub struct Tensor3 {
    pub s: usize,
    pub t: usize,
    pub a: usize,
    data: Vec<f64>,
}

impl Tensor3 {
    pub fn zeros(s: usize, t: usize, a: usize) -> Self {
        Tensor3 {
            s,
            t,
            a,
            data: vec![0.0; s * t * a],
        }
    }

    #[inline]
    pub fn idx(&self, si: usize, ti: usize, ai: usize) -> usize {
        (si * self.t + ti) * self.a + ai
    }

    #[inline]
    pub fn get(&self, si: usize, ti: usize, ai: usize) -> f64 {
        self.data[self.idx(si, ti, ai)]
    }

    #[inline]
    pub fn set(&mut self, si: usize, ti: usize, ai: usize, v: f64) {
        let i = self.idx(si, ti, ai);
        self.data[i] = v;
    }

    /// Slice of a single (path, step) across all assets — contiguous by construction.
    #[inline]
    pub fn step_slice(&self, si: usize, ti: usize) -> &[f64] {
        let start = self.idx(si, ti, 0);
        &self.data[start..start + self.a]
    }

    #[inline]
    pub fn step_slice_mut(&mut self, si: usize, ti: usize) -> &mut [f64] {
        let start = self.idx(si, ti, 0);
        &mut self.data[start..start + self.a]
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    Bear = 0,
    Bull = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tensor3_roundtrip() {
        let mut t = Tensor3::zeros(2, 3, 4);
        t.set(1, 2, 3, 7.5);
        assert_eq!(t.get(1, 2, 3), 7.5);
        assert_eq!(t.step_slice(1, 2)[3], 7.5);
    }
}
