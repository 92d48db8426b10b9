//! Bayesian line fitting with an affine-invariant ensemble sampler.
//!
//! The posterior lives in the normal-vector θ space (see
//! [`Line::to_normal_vector`]): a flat prior inside configurable
//! slope/intercept bounds times the total-least-squares likelihood of
//! [`tls_log_likelihood`](crate::tls::tls_log_likelihood). An ensemble of
//! walkers explores it with the Goodman & Weare (2010) stretch move: each
//! walker proposes a point on the line through itself and a randomly
//! chosen companion, which keeps the proposal scale self-tuning under any
//! affine reparametrization. Interpolating between walkers is also why the
//! ensemble must hold at least `2·ndim` of them.

use crate::optimize::{nelder_mead, NelderMeadOptions};
use crate::tls::tls_log_likelihood;
use crate::{fit_ols, stats, FitError, FitResult, Line, SampleSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimension of the sampled space: (θ₀, θ₁).
const NDIM: usize = 2;

/// Goodman-Weare stretch scale.
const STRETCH_SCALE: f64 = 2.0;

/// Gaussian jitter applied to the optimizer solution when seeding walkers.
const SEED_JITTER: f64 = 1e-4;

/// Tuning knobs for [`fit_mcmc`].
///
/// The default slope/intercept bounds, (-5, 0.5) × (0, 10), are inherited
/// from the astronomical distance-color relation this fitter was first
/// built for. They are *not* a general-purpose default; widen them to
/// match your data's plausible range.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct McmcConfig {
    pub walkers: usize,
    pub steps: usize,
    /// Leading steps of every walker discarded before summarizing.
    pub burn_in: usize,
    /// Flat-prior support for the slope, exclusive on both ends.
    pub slope_bounds: (f64, f64),
    /// Flat-prior support for the intercept, exclusive on both ends.
    pub intercept_bounds: (f64, f64),
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for McmcConfig {
    fn default() -> Self {
        Self {
            walkers: 100,
            steps: 2000,
            burn_in: 100,
            slope_bounds: (-5.0, 0.5),
            intercept_bounds: (0.0, 10.0),
            seed: None,
        }
    }
}

/// A posterior point estimate with asymmetric uncertainties:
/// `value` is the sample median, `plus`/`minus` the distances to the 84th
/// and 16th percentiles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CredibleValue {
    pub value: f64,
    pub plus: f64,
    pub minus: f64,
}

/// Result of [`fit_mcmc`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct McmcEstimate {
    pub slope: CredibleValue,
    pub intercept: CredibleValue,
}

impl McmcEstimate {
    /// The median line.
    pub fn line(&self) -> Line {
        Line::new(self.slope.value, self.intercept.value)
    }
}

/// Flat log-prior: zero inside the configured bounds, `-inf` outside.
///
/// Evaluated in (slope, intercept) space; θ₁ = 0 (a vertical line) maps to
/// non-finite coefficients and is rejected by the comparisons.
fn log_prior(theta: [f64; 2], config: &McmcConfig) -> f64 {
    let line = Line::from_normal_vector(theta);
    let (a_lo, a_hi) = config.slope_bounds;
    let (b_lo, b_hi) = config.intercept_bounds;
    if a_lo < line.slope && line.slope < a_hi && b_lo < line.intercept && line.intercept < b_hi {
        0.0
    } else {
        f64::NEG_INFINITY
    }
}

/// Log-posterior up to a constant: prior + total-least-squares likelihood.
fn log_posterior(theta: [f64; 2], data: &SampleSet, config: &McmcConfig) -> f64 {
    let lp = log_prior(theta, config);
    if !lp.is_finite() {
        return f64::NEG_INFINITY;
    }
    lp + tls_log_likelihood(theta, data)
}

/// Draws a stretch factor z with density ∝ 1/√z on [1/a, a].
fn stretch_factor(rng: &mut StdRng) -> f64 {
    let u: f64 = rng.gen();
    let s = (STRETCH_SCALE - 1.0) * u + 1.0;
    s * s / STRETCH_SCALE
}

/// Fits `y = slope·x + intercept` by sampling the total-least-squares
/// posterior.
///
/// Pipeline: ordinary least squares → normal-vector θ → Nelder-Mead
/// refinement of the likelihood → walkers seeded at the optimum with small
/// Gaussian jitter → stretch-move sampling → burn-in discard → medians and
/// 16th/84th percentile distances per coefficient.
///
/// # Errors
///
/// - `TooFewWalkers` when `walkers < 4` (2 × the sampled dimension)
/// - `InvalidConfiguration` for `burn_in ≥ steps`, inverted bounds, or an
///   optimizer solution outside the prior support (the bounds are too
///   narrow for the data)
/// - anything [`fit_ols`] or the optimizer reports
pub fn fit_mcmc(data: &SampleSet, config: &McmcConfig) -> FitResult<McmcEstimate> {
    if config.walkers < 2 * NDIM {
        return Err(FitError::too_few_walkers(config.walkers, NDIM));
    }
    if config.burn_in >= config.steps {
        return Err(FitError::invalid_configuration(format!(
            "burn-in of {} discards every one of the {} steps",
            config.burn_in, config.steps
        )));
    }
    if config.slope_bounds.0 >= config.slope_bounds.1
        || config.intercept_bounds.0 >= config.intercept_bounds.1
    {
        return Err(FitError::invalid_configuration(
            "prior bounds must satisfy lo < hi",
        ));
    }

    // maximum-likelihood starting point
    let seed_line = fit_ols(data)?;
    let nll = |t: &[f64]| -tls_log_likelihood([t[0], t[1]], data);
    let optimum = nelder_mead(nll, &seed_line.to_normal_vector(), &NelderMeadOptions::default())?;
    let theta_star = [optimum[0], optimum[1]];

    if !log_posterior(theta_star, data, config).is_finite() {
        return Err(FitError::invalid_configuration(
            "maximum-likelihood solution lies outside the prior bounds; \
             widen slope_bounds/intercept_bounds",
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut positions: Vec<[f64; 2]> = (0..config.walkers)
        .map(|_| {
            let jx: f64 = rng.sample(StandardNormal);
            let jy: f64 = rng.sample(StandardNormal);
            [theta_star[0] + SEED_JITTER * jx, theta_star[1] + SEED_JITTER * jy]
        })
        .collect();
    let mut log_probs: Vec<f64> = positions
        .iter()
        .map(|&p| log_posterior(p, data, config))
        .collect();

    let kept = config.steps - config.burn_in;
    let mut slopes: Vec<f64> = Vec::with_capacity(kept * config.walkers);
    let mut intercepts: Vec<f64> = Vec::with_capacity(kept * config.walkers);

    for step in 0..config.steps {
        for k in 0..config.walkers {
            // companion walker, anyone but k
            let j = loop {
                let j = rng.gen_range(0..config.walkers);
                if j != k {
                    break j;
                }
            };

            let z = stretch_factor(&mut rng);
            let proposal = [
                positions[j][0] + z * (positions[k][0] - positions[j][0]),
                positions[j][1] + z * (positions[k][1] - positions[j][1]),
            ];
            let lp = log_posterior(proposal, data, config);

            let ln_accept = (NDIM as f64 - 1.0) * libm::log(z) + lp - log_probs[k];
            if ln_accept >= 0.0 || rng.gen::<f64>() < libm::exp(ln_accept) {
                positions[k] = proposal;
                log_probs[k] = lp;
            }
        }

        if step >= config.burn_in {
            for p in &positions {
                let line = Line::from_normal_vector(*p);
                slopes.push(line.slope);
                intercepts.push(line.intercept);
            }
        }
    }

    Ok(McmcEstimate {
        slope: credible_value(&mut slopes)?,
        intercept: credible_value(&mut intercepts)?,
    })
}

fn credible_value(samples: &mut [f64]) -> FitResult<CredibleValue> {
    let p16 = stats::percentile(samples, 16.0)?;
    let p50 = stats::percentile(samples, 50.0)?;
    let p84 = stats::percentile(samples, 84.0)?;

    Ok(CredibleValue {
        value: p50,
        plus: p84 - p50,
        minus: p50 - p16,
    })
}
