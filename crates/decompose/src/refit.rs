//! Levenberg-Marquardt refit of the amplitudes for fixed decay rates.
//!
//! Wraps the `levenberg-marquardt` crate to minimize
//! `sum_j (sum_i a_i exp(lamda_i x_j) - f_j)^2` over `a`, starting from
//! all-zero amplitudes.
//!
//! **Not part of the public API.**

use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt, TerminationReason};
use nalgebra::storage::Owned;
use nalgebra::{DMatrix, DVector, Dyn};
use tracing::{debug, warn};

use crate::config::DecompositionConfig;
use crate::decomposition::exp_sum;
use crate::error::DecompositionError;

/// Fits amplitudes `a` for the given `lamda` against samples `f = f(x)`.
///
/// Callers guarantee `x.len() == f.len()` and a non-empty `lamda`.
pub(crate) fn fit_amplitudes(
    x: &[f64],
    f: &[f64],
    lamda: &[f64],
    config: &DecompositionConfig,
) -> Result<Vec<f64>, DecompositionError> {
    let problem = AmplitudeProblem::new(x, f, lamda);

    let solver = LevenbergMarquardt::new()
        .with_ftol(config.ftol())
        .with_xtol(config.xtol())
        .with_gtol(config.gtol())
        .with_patience(config.patience());
    let (problem, report) = solver.minimize(problem);

    debug!(
        evaluations = report.number_of_evaluations,
        objective = report.objective_function,
        termination = ?report.termination,
        "amplitude fit finished"
    );

    match &report.termination {
        t if t.was_successful() => {}
        TerminationReason::NoImprovementPossible(what) => {
            warn!(limit = *what, "amplitude fit stopped at machine precision");
        }
        TerminationReason::LostPatience => {
            return Err(DecompositionError::FitNotConverged {
                evaluations: report.number_of_evaluations,
            });
        }
        other => {
            return Err(DecompositionError::FitFailed {
                reason: format!("{other:?}"),
            });
        }
    }

    Ok(problem.params().iter().copied().collect())
}

/// Linear-in-parameters least-squares problem for the amplitudes.
struct AmplitudeProblem<'a> {
    x: &'a [f64],
    f: &'a [f64],
    lamda: &'a [f64],
    /// `basis[(j, i)] = exp(lamda_i * x_j)`; also the Jacobian.
    basis: DMatrix<f64>,
    a: DVector<f64>,
}

impl<'a> AmplitudeProblem<'a> {
    fn new(x: &'a [f64], f: &'a [f64], lamda: &'a [f64]) -> Self {
        let basis = DMatrix::from_fn(x.len(), lamda.len(), |j, i| (lamda[i] * x[j]).exp());
        Self {
            x,
            f,
            lamda,
            basis,
            a: DVector::zeros(lamda.len()),
        }
    }
}

impl LeastSquaresProblem<f64, Dyn, Dyn> for AmplitudeProblem<'_> {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, Dyn>;
    type ParameterStorage = Owned<f64, Dyn>;

    fn set_params(&mut self, a: &DVector<f64>) {
        self.a.copy_from(a);
    }

    fn params(&self) -> DVector<f64> {
        self.a.clone()
    }

    fn residuals(&self) -> Option<DVector<f64>> {
        let a = self.a.as_slice();
        Some(DVector::from_iterator(
            self.x.len(),
            self.x
                .iter()
                .zip(self.f)
                .map(|(&x_j, &f_j)| exp_sum(a, self.lamda, x_j) - f_j),
        ))
    }

    fn jacobian(&self) -> Option<DMatrix<f64>> {
        Some(self.basis.clone())
    }
}
