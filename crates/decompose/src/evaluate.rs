//! Mean-square error of a decomposition against reference samples.

use crate::decomposition::exp_sum;
use crate::error::DecompositionError;
use crate::validate;

/// Computes the mean-square error of the decomposition `(a, lamda)` against
/// reference values `f` sampled at `x`.
///
/// The model `sum_i a[i] * exp(lamda[i] * x_j)` is evaluated at every sample
/// point and the squared differences to `f` are averaged. The result is
/// never negative and is exactly zero when `f` equals the model everywhere.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DecompositionError::LengthMismatch`] | `x.len() != f.len()` or `a.len() != lamda.len()` |
/// | [`DecompositionError::EmptyData`] | `x` is empty |
///
/// # Example
///
/// ```
/// use expsum_decompose::decomposition_error;
///
/// let x = [0.0, 1.0];
/// let f = [1.0, (-1.0_f64).exp()];
/// let err = decomposition_error(&x, &f, &[1.0], &[-1.0]).unwrap();
/// assert_eq!(err, 0.0);
/// ```
pub fn decomposition_error(
    x: &[f64],
    f: &[f64],
    a: &[f64],
    lamda: &[f64],
) -> Result<f64, DecompositionError> {
    validate::same_len(x.len(), f.len(), "f")?;
    validate::same_len(a.len(), lamda.len(), "lamda")?;
    if x.is_empty() {
        return Err(DecompositionError::EmptyData);
    }

    let sse: f64 = x
        .iter()
        .zip(f)
        .map(|(&x_j, &f_j)| {
            let r = exp_sum(a, lamda, x_j) - f_j;
            r * r
        })
        .sum();
    Ok(sse / x.len() as f64)
}
