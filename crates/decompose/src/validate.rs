//! Input checks shared by the decomposer and the error evaluator.

use crate::error::DecompositionError;

/// Fails with [`DecompositionError::LengthMismatch`] unless `got == expected`.
pub(crate) fn same_len(
    expected: usize,
    got: usize,
    field: &'static str,
) -> Result<(), DecompositionError> {
    if got != expected {
        return Err(DecompositionError::LengthMismatch {
            expected,
            got,
            field,
        });
    }
    Ok(())
}

/// Validates a sample set for decomposition into `m` terms.
///
/// Returns the sample spacing `x[1] - x[0]`.
pub(crate) fn samples(x: &[f64], f: &[f64], m: usize) -> Result<f64, DecompositionError> {
    same_len(x.len(), f.len(), "f")?;
    if m == 0 {
        return Err(DecompositionError::InvalidTermCount { m });
    }
    let min = m + 1;
    if x.len() < min {
        return Err(DecompositionError::InsufficientData { n: x.len(), min });
    }
    if x.iter().chain(f).any(|v| !v.is_finite()) {
        return Err(DecompositionError::NonFiniteData);
    }
    let spacing = x[1] - x[0];
    if spacing == 0.0 {
        return Err(DecompositionError::InvalidSpacing { spacing });
    }
    Ok(spacing)
}
