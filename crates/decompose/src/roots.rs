//! Prediction-polynomial roots and decay-rate extraction.
//!
//! The prediction coefficients `p` define the monic polynomial
//! `z^m - p[0] z^(m-1) - ... - p[m-1]`, whose roots are `exp(lamda * h)`
//! for sample spacing `h`.
//!
//! **Not part of the public API.**

use nalgebra::DMatrix;
use num_complex::Complex64;

/// Builds the companion matrix of `z^m - p[0] z^(m-1) - ... - p[m-1]`.
///
/// The first row holds `p`, the subdiagonal holds ones.
pub(crate) fn companion_matrix(p: &[f64]) -> DMatrix<f64> {
    let m = p.len();
    DMatrix::from_fn(m, m, |i, j| {
        if i == 0 {
            p[j]
        } else if i == j + 1 {
            1.0
        } else {
            0.0
        }
    })
}

/// Returns all `m` complex roots of the prediction polynomial, unordered.
pub(crate) fn characteristic_roots(p: &[f64]) -> Vec<Complex64> {
    match p.len() {
        0 => Vec::new(),
        1 => vec![Complex64::new(p[0], 0.0)],
        _ => companion_matrix(p)
            .complex_eigenvalues()
            .iter()
            .map(|z| Complex64::new(z.re, z.im))
            .collect(),
    }
}

/// Converts roots to decay rates, sorted ascending with exact duplicates removed.
///
/// Roots on the non-positive real axis have no real logarithm and are
/// skipped. Complex roots are always kept; only the real part of their
/// logarithm contributes.
pub(crate) fn decay_rates(roots: &[Complex64], spacing: f64) -> Vec<f64> {
    let mut rates: Vec<f64> = roots
        .iter()
        .filter(|r| r.im != 0.0 || r.re > 0.0)
        .map(|r| r.ln().re / spacing)
        .collect();
    rates.sort_by(f64::total_cmp);
    rates.dedup();
    rates
}

/// Keeps rates strictly inside the open interval `(min, max)`.
pub(crate) fn retain_in_bounds(rates: &mut Vec<f64>, (min, max): (f64, f64)) {
    rates.retain(|&lamda| min < lamda && lamda < max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sorted_re(mut roots: Vec<Complex64>) -> Vec<f64> {
        roots.sort_by(|a, b| a.re.total_cmp(&b.re));
        roots.iter().map(|z| z.re).collect()
    }

    #[test]
    fn companion_layout() {
        let c = companion_matrix(&[1.4, -0.45]);
        assert_eq!(c[(0, 0)], 1.4);
        assert_eq!(c[(0, 1)], -0.45);
        assert_eq!(c[(1, 0)], 1.0);
        assert_eq!(c[(1, 1)], 0.0);
    }

    #[test]
    fn single_root() {
        let roots = characteristic_roots(&[0.7]);
        assert_eq!(roots, vec![Complex64::new(0.7, 0.0)]);
    }

    #[test]
    fn real_roots_of_quadratic() {
        // (z - 0.9)(z - 0.5) = z^2 - 1.4 z + 0.45
        let roots = characteristic_roots(&[1.4, -0.45]);
        assert_eq!(roots.len(), 2);
        for z in &roots {
            assert_abs_diff_eq!(z.im, 0.0, epsilon = 1e-12);
        }
        let re = sorted_re(roots);
        assert_abs_diff_eq!(re[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(re[1], 0.9, epsilon = 1e-12);
    }

    #[test]
    fn complex_pair_of_quadratic() {
        // z^2 + 1 has roots +-i
        let roots = characteristic_roots(&[0.0, -1.0]);
        assert_eq!(roots.len(), 2);
        for z in &roots {
            assert_abs_diff_eq!(z.re, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(z.im.abs(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn cubic_roots() {
        // (z - 0.2)(z - 0.4)(z - 0.8) = z^3 - 1.4 z^2 + 0.56 z - 0.064
        let roots = characteristic_roots(&[1.4, -0.56, 0.064]);
        let re = sorted_re(roots);
        assert_abs_diff_eq!(re[0], 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(re[1], 0.4, epsilon = 1e-9);
        assert_abs_diff_eq!(re[2], 0.8, epsilon = 1e-9);
    }

    #[test]
    fn non_positive_real_roots_skipped() {
        let roots = [
            Complex64::new(-0.5, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.5, 0.0),
        ];
        let rates = decay_rates(&roots, 1.0);
        assert_eq!(rates.len(), 1);
        assert_abs_diff_eq!(rates[0], 0.5_f64.ln(), epsilon = 1e-15);
    }

    #[test]
    fn negative_complex_roots_kept() {
        let roots = [Complex64::new(-0.5, 0.1)];
        let rates = decay_rates(&roots, 1.0);
        assert_eq!(rates.len(), 1);
        assert_abs_diff_eq!(rates[0], 0.26_f64.sqrt().ln(), epsilon = 1e-12);
    }

    #[test]
    fn conjugate_pair_collapses() {
        let roots = [Complex64::new(0.3, 0.4), Complex64::new(0.3, -0.4)];
        let rates = decay_rates(&roots, 0.5);
        assert_eq!(rates.len(), 1);
        assert_abs_diff_eq!(rates[0], 0.5_f64.ln() / 0.5, epsilon = 1e-12);
    }

    #[test]
    fn rates_sorted_and_scaled() {
        let roots = [Complex64::new(0.9, 0.0), Complex64::new(0.1, 0.0)];
        let rates = decay_rates(&roots, 0.1);
        assert_abs_diff_eq!(rates[0], 0.1_f64.ln() / 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(rates[1], 0.9_f64.ln() / 0.1, epsilon = 1e-12);
    }

    #[test]
    fn open_interval_bounds() {
        let mut rates = vec![-25.0, -20.0, -10.0, 0.0, 0.5];
        retain_in_bounds(&mut rates, (-20.0, 0.0));
        assert_eq!(rates, vec![-10.0]);
    }

    #[test]
    fn unit_root_gives_zero_rate() {
        // ln(1) = 0 exactly, which lies on the excluded upper bound.
        let roots = [Complex64::new(1.0, 0.0), Complex64::new((-10.0_f64).exp(), 0.0)];
        let mut rates = decay_rates(&roots, 1.0);
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[1], 0.0);
        retain_in_bounds(&mut rates, (-20.0, 0.0));
        assert_eq!(rates.len(), 1);
        assert_abs_diff_eq!(rates[0], -10.0, epsilon = 1e-12);
    }
}
