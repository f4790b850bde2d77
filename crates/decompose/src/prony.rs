//! Linear prediction step of Prony's method.
//!
//! **Not part of the public API.**

use nalgebra::{DMatrix, DVector};

use crate::error::DecompositionError;

/// Builds the `(N - m) x m` Toeplitz prediction matrix.
///
/// Row `i` holds `f[i+m-1], f[i+m-2], ..., f[i]`, so the first column is
/// `f[m-1..N-1]` and the first row is `f[m-1], ..., f[0]`.
pub(crate) fn prediction_matrix(f: &[f64], m: usize) -> DMatrix<f64> {
    let rows = f.len() - m;
    DMatrix::from_fn(rows, m, |i, j| f[i + m - 1 - j])
}

/// Solves `A p ~= f[m..N]` for the linear prediction coefficients `p`.
///
/// Uses an SVD minimum-norm least-squares solve, so a rank-deficient `A`
/// yields a degraded solution rather than an error. Singular values below
/// `EPSILON * max(rows, cols) * s_max` are treated as zero.
///
/// Callers guarantee `1 <= m < f.len()`.
pub(crate) fn prediction_coefficients(f: &[f64], m: usize) -> Result<Vec<f64>, DecompositionError> {
    let a = prediction_matrix(f, m);
    let b = DVector::from_column_slice(&f[m..]);

    let svd = a.svd(true, true);
    let s_max = svd.singular_values.max();
    let eps = f64::EPSILON * (f.len() - m).max(m) as f64 * s_max;

    let p = svd
        .solve(&b, eps)
        .map_err(|reason| DecompositionError::LinearSolveFailed {
            reason: reason.to_string(),
        })?;

    Ok(p.iter().copied().collect())
}
