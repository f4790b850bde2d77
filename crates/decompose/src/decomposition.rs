//! Sum-of-exponentials decomposition results.

use crate::error::DecompositionError;
use crate::validate;

/// A decomposition `x -> sum_i a_i * exp(lamda_i * x)`.
///
/// Produced by [`decompose()`](crate::decompose) or built directly from
/// known terms with [`Decomposition::new()`]. Immutable once constructed;
/// amplitudes and decay rates always have the same length.
///
/// # Example
///
/// ```
/// use expsum_decompose::Decomposition;
///
/// let d = Decomposition::new(vec![2.0, 1.0], vec![-0.5, -3.0]).unwrap();
/// assert_eq!(d.len(), 2);
/// assert_eq!(d.evaluate(0.0), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    amplitudes: Vec<f64>,
    decay_rates: Vec<f64>,
}

impl Decomposition {
    /// Creates a decomposition from amplitudes `a` and decay rates `lamda`.
    ///
    /// # Errors
    ///
    /// Returns [`DecompositionError::LengthMismatch`] if the two vectors
    /// differ in length.
    pub fn new(amplitudes: Vec<f64>, decay_rates: Vec<f64>) -> Result<Self, DecompositionError> {
        validate::same_len(amplitudes.len(), decay_rates.len(), "decay_rates")?;
        Ok(Self {
            amplitudes,
            decay_rates,
        })
    }

    /// Returns the amplitudes (`a`).
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Returns the decay rates (`lamda`).
    pub fn decay_rates(&self) -> &[f64] {
        &self.decay_rates
    }

    /// Returns the number of exponential terms.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Returns `true` if the decomposition has no terms.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Iterates over `(a_i, lamda_i)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.amplitudes
            .iter()
            .copied()
            .zip(self.decay_rates.iter().copied())
    }

    /// Evaluates the exponential sum at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        exp_sum(&self.amplitudes, &self.decay_rates, x)
    }

    /// Evaluates the exponential sum at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Mean-square error of this decomposition against samples `f = f(x)`.
    ///
    /// Same as [`decomposition_error()`](crate::decomposition_error).
    pub fn error(&self, x: &[f64], f: &[f64]) -> Result<f64, DecompositionError> {
        crate::evaluate::decomposition_error(x, f, &self.amplitudes, &self.decay_rates)
    }

    /// Consumes the decomposition, returning `(a, lamda)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.amplitudes, self.decay_rates)
    }
}

/// `sum_i a[i] * exp(lamda[i] * x)`; callers guarantee equal lengths.
pub(crate) fn exp_sum(a: &[f64], lamda: &[f64], x: f64) -> f64 {
    a.iter()
        .zip(lamda)
        .map(|(&a_i, &l_i)| a_i * (l_i * x).exp())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_rejects_mismatch() {
        let err = Decomposition::new(vec![1.0], vec![-1.0, -2.0]).unwrap_err();
        assert!(matches!(
            err,
            DecompositionError::LengthMismatch {
                expected: 1,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn empty_evaluates_to_zero() {
        let d = Decomposition::new(vec![], vec![]).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.evaluate(3.0), 0.0);
    }

    #[test]
    fn evaluate_matches_closed_form() {
        let d = Decomposition::new(vec![2.0, 1.0], vec![-0.5, -3.0]).unwrap();
        for &x in &[0.0_f64, 0.25, 1.0, 7.5] {
            let expected = 2.0 * (-0.5 * x).exp() + (-3.0 * x).exp();
            assert_abs_diff_eq!(d.evaluate(x), expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn evaluate_many_maps_points() {
        let d = Decomposition::new(vec![1.0], vec![-1.0]).unwrap();
        let ys = d.evaluate_many(&[0.0, 1.0]);
        assert_eq!(ys.len(), 2);
        assert_eq!(ys[0], 1.0);
        assert_abs_diff_eq!(ys[1], (-1.0_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn terms_and_parts() {
        let d = Decomposition::new(vec![3.0, 4.0], vec![-1.0, -2.0]).unwrap();
        let terms: Vec<_> = d.terms().collect();
        assert_eq!(terms, vec![(3.0, -1.0), (4.0, -2.0)]);
        let (a, lamda) = d.into_parts();
        assert_eq!(a, vec![3.0, 4.0]);
        assert_eq!(lamda, vec![-1.0, -2.0]);
    }

    #[test]
    fn error_method_is_zero_on_own_samples() {
        let d = Decomposition::new(vec![1.5], vec![-0.2]).unwrap();
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
        let f = d.evaluate_many(&x);
        assert_eq!(d.error(&x, &f).unwrap(), 0.0);
    }
}
