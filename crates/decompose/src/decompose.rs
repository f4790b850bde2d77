//! The Prony decomposition pipeline.

use tracing::{debug, warn};

use crate::config::DecompositionConfig;
use crate::decomposition::Decomposition;
use crate::error::DecompositionError;
use crate::{prony, refit, roots, validate};

/// Approximates `f = f(x)` as a sum of at most `m` decaying exponentials
/// using the default [`DecompositionConfig`].
///
/// See [`decompose_with_config()`] for the algorithm and error conditions.
///
/// # Example
///
/// ```
/// use expsum_decompose::decompose;
///
/// let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.05).collect();
/// let f: Vec<f64> = x.iter().map(|&t| 1.5 * (-2.0 * t).exp()).collect();
///
/// let d = decompose(&x, &f, 1).unwrap();
/// assert!((d.decay_rates()[0] + 2.0).abs() < 1e-6);
/// assert!((d.amplitudes()[0] - 1.5).abs() < 1e-6);
/// ```
pub fn decompose(x: &[f64], f: &[f64], m: usize) -> Result<Decomposition, DecompositionError> {
    decompose_with_config(x, f, m, &DecompositionConfig::default())
}

/// Approximates `f = f(x)` as a sum of at most `m` decaying exponentials.
///
/// `x` must be uniformly spaced; only `x[1] - x[0]` is used.
///
/// 1. Solve the Toeplitz linear prediction system for `m` coefficients.
/// 2. Find the roots of the resulting monic prediction polynomial.
/// 3. Convert roots to decay rates, drop duplicates and rates outside the
///    configured open interval (default `(-20, 0)`).
/// 4. Refit the amplitudes by Levenberg-Marquardt, starting at zero.
///
/// The result may hold fewer than `m` terms when roots are filtered out.
/// Its decay rates are sorted ascending.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DecompositionError::InvalidConfig`] | `config` fails validation |
/// | [`DecompositionError::LengthMismatch`] | `x.len() != f.len()` |
/// | [`DecompositionError::InvalidTermCount`] | `m == 0` |
/// | [`DecompositionError::InsufficientData`] | `x.len() < m + 1` |
/// | [`DecompositionError::NonFiniteData`] | any value is NaN or infinite |
/// | [`DecompositionError::InvalidSpacing`] | `x[1] == x[0]` |
/// | [`DecompositionError::NoDecayingTerms`] | every root is filtered out |
/// | [`DecompositionError::FitNotConverged`] | amplitude fit exhausts its budget |
/// | [`DecompositionError::FitFailed`] | amplitude fit stops on a numerical failure |
#[tracing::instrument(skip(x, f, config), fields(n = x.len()))]
pub fn decompose_with_config(
    x: &[f64],
    f: &[f64],
    m: usize,
    config: &DecompositionConfig,
) -> Result<Decomposition, DecompositionError> {
    config.validate()?;
    let spacing = validate::samples(x, f, m)?;

    // --- Linear prediction ---
    let p = prony::prediction_coefficients(f, m)?;

    // --- Roots and decay rates ---
    let roots = roots::characteristic_roots(&p);
    let mut lamda = roots::decay_rates(&roots, spacing);
    let candidates = lamda.len();
    roots::retain_in_bounds(&mut lamda, config.decay_bounds());
    debug!(roots = roots.len(), candidates, kept = lamda.len(), "decay rates extracted");

    if lamda.is_empty() {
        return Err(DecompositionError::NoDecayingTerms { requested: m });
    }
    if lamda.len() < m {
        warn!(requested = m, kept = lamda.len(), "fewer decaying terms than requested");
    }

    // --- Amplitude refit ---
    let a = refit::fit_amplitudes(x, f, &lamda, config)?;

    Decomposition::new(a, lamda)
}
