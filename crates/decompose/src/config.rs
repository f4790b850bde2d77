//! Configuration for exponential decomposition.

use crate::error::DecompositionError;

/// Configuration for [`decompose_with_config`](crate::decompose_with_config).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use expsum_decompose::DecompositionConfig;
///
/// let config = DecompositionConfig::new()
///     .with_decay_bounds(-5.0, 0.0)
///     .with_patience(200);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecompositionConfig {
    /// Open interval `(min, max)` a decay rate must fall in to be kept.
    decay_bounds: (f64, f64),
    /// Relative tolerance on the sum of squared residuals.
    ftol: f64,
    /// Relative tolerance on the amplitude step.
    xtol: f64,
    /// Orthogonality tolerance between residuals and Jacobian columns.
    gtol: f64,
    /// Evaluation budget multiplier: the fit stops after `patience * (k + 1)`
    /// residual evaluations.
    patience: usize,
}

impl DecompositionConfig {
    /// Creates a new configuration with default settings.
    ///
    /// Defaults: `decay_bounds = (-20, 0)`, `ftol = xtol = 30 * EPSILON`,
    /// `gtol = 0`, `patience = 100`.
    pub fn new() -> Self {
        Self {
            decay_bounds: (-20.0, 0.0),
            ftol: 30.0 * f64::EPSILON,
            xtol: 30.0 * f64::EPSILON,
            gtol: 0.0,
            patience: 100,
        }
    }

    /// Sets the open interval of accepted decay rates.
    pub fn with_decay_bounds(mut self, min: f64, max: f64) -> Self {
        self.decay_bounds = (min, max);
        self
    }

    /// Sets the residual tolerance of the amplitude fit.
    pub fn with_ftol(mut self, ftol: f64) -> Self {
        self.ftol = ftol;
        self
    }

    /// Sets the step tolerance of the amplitude fit.
    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.xtol = xtol;
        self
    }

    /// Sets the gradient tolerance of the amplitude fit.
    pub fn with_gtol(mut self, gtol: f64) -> Self {
        self.gtol = gtol;
        self
    }

    /// Sets the evaluation budget multiplier of the amplitude fit.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Returns the open interval of accepted decay rates.
    pub fn decay_bounds(&self) -> (f64, f64) {
        self.decay_bounds
    }

    /// Returns the residual tolerance.
    pub fn ftol(&self) -> f64 {
        self.ftol
    }

    /// Returns the step tolerance.
    pub fn xtol(&self) -> f64 {
        self.xtol
    }

    /// Returns the gradient tolerance.
    pub fn gtol(&self) -> f64 {
        self.gtol
    }

    /// Returns the evaluation budget multiplier.
    pub fn patience(&self) -> usize {
        self.patience
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the decay bounds are non-finite or empty, any
    /// tolerance is negative or non-finite, or `patience` is zero.
    pub fn validate(&self) -> Result<(), DecompositionError> {
        let (min, max) = self.decay_bounds;
        if !min.is_finite() || !max.is_finite() {
            return Err(DecompositionError::InvalidConfig {
                reason: format!("decay bounds must be finite, got ({min}, {max})"),
            });
        }
        if min >= max {
            return Err(DecompositionError::InvalidConfig {
                reason: format!("decay bounds must satisfy min < max, got ({min}, {max})"),
            });
        }
        for (value, name) in [(self.ftol, "ftol"), (self.xtol, "xtol"), (self.gtol, "gtol")] {
            if !value.is_finite() || value < 0.0 {
                return Err(DecompositionError::InvalidConfig {
                    reason: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }
        if self.patience < 1 {
            return Err(DecompositionError::InvalidConfig {
                reason: "patience must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self::new()
    }
}
