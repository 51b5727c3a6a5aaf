//! Correlation matrix synthesis and Cholesky factorization.
//!
//! The teacher crate has no matrix-algebra dependency (it only ever prices
//! one asset at a time); the `nalgebra::Cholesky` / `SymmetricEigen` pair
//! used below follows `other_examples/.../porfolio.rs.rs` and
//! `bihari123-tradecaptain/src/risk.rs`, both of which reach for `nalgebra`
//! for exactly this correlation-to-Cholesky step.

use nalgebra::{DMatrix, SymmetricEigen};
use tracing::warn;

use crate::engine::config::AssetClass;
use crate::error::{EngineError, EngineResult};

const PSD_EPSILON: f64 = 1e-8;

/// Synthesize a correlation matrix from coarse asset-class tags (spec.md
/// §4.2). This is a fallback only; callers may supply their own matrix or
/// replace this hook with real historical correlations.
pub fn synthesize(classes: &[AssetClass]) -> DMatrix<f64> {
    let n = classes.len();
    let mut m = DMatrix::<f64>::identity(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let corr = pairwise_default(classes[i], classes[j]);
            m[(i, j)] = corr;
            m[(j, i)] = corr;
        }
    }
    m
}

fn pairwise_default(a: AssetClass, b: AssetClass) -> f64 {
    use AssetClass::*;
    if a == Commodity || b == Commodity {
        return 0.10;
    }
    match (a, b) {
        (TechEquity, TechEquity) => 0.75,
        (Equity, Equity) | (Equity, TechEquity) | (TechEquity, Equity) => 0.65,
        (Bond, Bond) => 0.85,
        (Equity, Bond) | (Bond, Equity) | (TechEquity, Bond) | (Bond, TechEquity) => -0.25,
        _ => 0.50,
    }
}

/// Cholesky factor `L` such that `L * L^T = C`. Attempts Cholesky directly;
/// on failure (non-PSD), clamps the eigenvalues of the symmetric
/// eigendecomposition to `>= 1e-8`, reassembles `C' = Q diag(lambda') Q^T`,
/// and retries. Per spec.md §4.2 this must succeed, else `NumericError`.
pub fn factorize(matrix: &DMatrix<f64>) -> EngineResult<DMatrix<f64>> {
    if let Some(chol) = matrix.clone().cholesky() {
        return Ok(chol.l());
    }

    warn!("correlation matrix is not positive semidefinite, repairing via eigenvalue clamp");
    let eigen = SymmetricEigen::new(matrix.clone());
    let clamped = eigen.eigenvalues.map(|lambda| lambda.max(PSD_EPSILON));
    let repaired = &eigen.eigenvectors
        * DMatrix::from_diagonal(&clamped)
        * eigen.eigenvectors.transpose();

    repaired
        .cholesky()
        .map(|c| c.l())
        .ok_or_else(|| EngineError::numeric("Cholesky failed even after PSD repair"))
}

/// Parse a row-major `Vec<Vec<f64>>` (as supplied by a caller) into a
/// `DMatrix`. Caller is expected to have already run `config::validate_correlation`.
pub fn from_rows(rows: &[Vec<f64>]) -> DMatrix<f64> {
    let n = rows.len();
    DMatrix::from_fn(n, n, |i, j| rows[i][j])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesize_has_unit_diagonal() {
        let classes = vec![AssetClass::Equity, AssetClass::Bond, AssetClass::Commodity];
        let m = synthesize(&classes);
        for i in 0..3 {
            assert_eq!(m[(i, i)], 1.0);
        }
        assert_eq!(m[(0, 1)], -0.25);
        assert_eq!(m[(1, 0)], -0.25);
        assert_eq!(m[(0, 2)], 0.10);
    }

    #[test]
    fn factorize_recovers_identity() {
        let m = DMatrix::<f64>::identity(3, 3);
        let l = factorize(&m).unwrap();
        assert!((l - DMatrix::<f64>::identity(3, 3)).norm() < 1e-9);
    }

    #[test]
    fn factorize_repairs_non_psd_matrix() {
        // A symmetric matrix with unit diagonal but an eigenvalue < 0.
        let mut m = DMatrix::<f64>::identity(3, 3);
        m[(0, 1)] = 0.9;
        m[(1, 0)] = 0.9;
        m[(0, 2)] = 0.9;
        m[(2, 0)] = 0.9;
        m[(1, 2)] = -0.9;
        m[(2, 1)] = -0.9;

        let l = factorize(&m).expect("repair should succeed");
        let reconstructed = &l * l.transpose();
        // diagonal of the repaired correlation matrix should stay close to 1
        for i in 0..3 {
            assert!((reconstructed[(i, i)] - 1.0).abs() < 0.2);
        }
    }
}
