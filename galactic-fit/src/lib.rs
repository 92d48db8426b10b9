//! Straight-line fitting for data with errors in both axes.
//!
//! Ordinary least squares assumes the x values are exact, which silently
//! biases the slope when they are not. Both fitters here minimize
//! *orthogonal* (perpendicular-to-the-line, noise-weighted) residuals
//! instead:
//!
//! - [`fit_mcmc`] samples the posterior of a total-least-squares likelihood
//!   with an affine-invariant ensemble sampler and reports medians with
//!   asymmetric 16th/84th-percentile uncertainties.
//! - [`fit_odr`] runs the iterative York regression and reports symmetric
//!   asymptotic standard errors.
//!
//! The model is `y = slope·x + intercept` throughout. Inputs arrive as a
//! validated [`SampleSet`]; every precondition violation is a typed
//! [`FitError`], surfaced immediately.

pub mod errors;
pub mod line;
pub mod mcmc;
pub mod odr;
pub mod ols;
pub mod optimize;
pub mod samples;
pub mod stats;
pub mod tls;

pub use errors::{FitError, FitResult};
pub use line::Line;
pub use mcmc::{fit_mcmc, CredibleValue, McmcConfig, McmcEstimate};
pub use odr::{fit_odr, OdrEstimate};
pub use ols::fit_ols;
pub use samples::SampleSet;
