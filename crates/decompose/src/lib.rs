//! # expsum-decompose
//!
//! Approximates a uniformly sampled real function as a finite sum of
//! decaying exponentials, `f(x) ~= sum_i a_i * exp(lamda_i * x)`, using
//! Prony's method followed by a Levenberg-Marquardt amplitude refit.
//!
//! ## Pipeline
//!
//! ```text
//! decompose_with_config()
//!   ├─ validate inputs                    (validate.rs)
//!   ├─ prediction_coefficients()          (prony.rs)   Toeplitz SVD solve
//!   ├─ characteristic_roots()             (roots.rs)   companion eigenvalues
//!   ├─ decay_rates() + retain_in_bounds() (roots.rs)   keep lamda in (-20, 0)
//!   └─ fit_amplitudes()                   (refit.rs)   Levenberg-Marquardt
//! ```
//!
//! ## Quick start
//!
//! ```
//! use expsum_decompose::{decompose, decomposition_error};
//!
//! let x: Vec<f64> = (0..200).map(|i| i as f64 * 10.0 / 199.0).collect();
//! let f: Vec<f64> = x
//!     .iter()
//!     .map(|&t| 2.0 * (-0.5 * t).exp() + (-3.0 * t).exp())
//!     .collect();
//!
//! let d = decompose(&x, &f, 2).unwrap();
//! let err = decomposition_error(&x, &f, d.amplitudes(), d.decay_rates()).unwrap();
//! assert!(err < 1e-6);
//! ```
//!
//! Fewer than `m` terms may be returned: roots that do not correspond to a
//! decay rate strictly inside the configured bounds are dropped silently.
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | a | [`Decomposition::amplitudes()`] | Amplitude of each exponential term |
//! | lamda | [`Decomposition::decay_rates()`] | Decay rate, negative for decaying terms |
//! | m | argument of [`decompose()`] | Requested number of terms |

mod decompose;
mod decomposition;
mod error;
mod evaluate;

pub mod config;

pub(crate) mod prony;
pub(crate) mod refit;
pub(crate) mod roots;
pub(crate) mod validate;

pub use config::DecompositionConfig;
pub use decompose::{decompose, decompose_with_config};
pub use decomposition::Decomposition;
pub use error::DecompositionError;
pub use evaluate::decomposition_error;
