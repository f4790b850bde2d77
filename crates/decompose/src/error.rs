//! Error types for the expsum-decompose crate.

/// Error type for all fallible operations in the expsum-decompose crate.
///
/// Covers input contract violations, degenerate decompositions where no
/// decaying term survives root filtering, and failures reported by the
/// Levenberg-Marquardt amplitude fit.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecompositionError {
    /// Returned when two paired sequences differ in length.
    #[error("length mismatch: {field} has {got} elements, expected {expected}")]
    LengthMismatch {
        /// Expected length (taken from the first sequence of the pair).
        expected: usize,
        /// Actual length of the offending sequence.
        got: usize,
        /// Name of the offending sequence.
        field: &'static str,
    },

    /// Returned when the sample set is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when zero exponential terms are requested.
    #[error("number of exponential terms must be at least 1, got {m}")]
    InvalidTermCount {
        /// Requested number of terms.
        m: usize,
    },

    /// Returned when there are not enough samples for the requested term count.
    #[error("insufficient data: got {n} samples, need at least {min}")]
    InsufficientData {
        /// Number of samples provided.
        n: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Returned when the sample positions or values contain NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the first two sample positions coincide.
    #[error("sample spacing must be non-zero, got {spacing}")]
    InvalidSpacing {
        /// The spacing `x[1] - x[0]`.
        spacing: f64,
    },

    /// Returned when a [`DecompositionConfig`](crate::DecompositionConfig) fails validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },

    /// Returned when the linear prediction solve cannot produce coefficients.
    #[error("linear prediction solve failed: {reason}")]
    LinearSolveFailed {
        /// Reason reported by the solver.
        reason: String,
    },

    /// Returned when every root of the prediction polynomial is discarded
    /// by the decay-rate filter.
    #[error("no decaying terms survived root filtering (requested {requested})")]
    NoDecayingTerms {
        /// Number of terms originally requested.
        requested: usize,
    },

    /// Returned when the amplitude fit exhausts its evaluation budget.
    #[error("amplitude fit did not converge after {evaluations} evaluations")]
    FitNotConverged {
        /// Number of residual evaluations performed.
        evaluations: usize,
    },

    /// Returned when the amplitude fit stops on a numerical failure.
    #[error("amplitude fit failed: {reason}")]
    FitFailed {
        /// Termination reason reported by the solver.
        reason: String,
    },
}
