//! Derivative-free local minimization (Nelder-Mead simplex).
//!
//! The total-least-squares likelihood has no convenient analytic gradient
//! in θ space, so the sampler's starting point is refined with the simplex
//! method: reflect the worst vertex through the centroid of the rest,
//! expand when that keeps improving, contract or shrink when it does not.

use crate::{FitError, FitResult};
use std::cmp::Ordering;

const ALPHA: f64 = 1.0; // reflection
const GAMMA: f64 = 2.0; // expansion
const RHO: f64 = 0.5; // contraction
const SIGMA: f64 = 0.5; // shrink

#[derive(Debug, Clone, Copy)]
pub struct NelderMeadOptions {
    pub max_iterations: usize,
    /// Convergence threshold on the spread of function values across the
    /// simplex.
    pub f_tolerance: f64,
    /// Convergence threshold on the simplex diameter.
    pub x_tolerance: f64,
}

impl Default for NelderMeadOptions {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            f_tolerance: 1e-10,
            x_tolerance: 1e-10,
        }
    }
}

/// Minimizes `f` starting from `x0`.
///
/// # Errors
/// `DidNotConverge` if the simplex has not collapsed within
/// `max_iterations`; the caller decides whether to retry with looser
/// tolerances. Degenerate objectives that are flat everywhere converge
/// trivially, so a convergence failure here usually means pathological
/// input data.
pub fn nelder_mead<F>(f: F, x0: &[f64], opts: &NelderMeadOptions) -> FitResult<Vec<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let n = x0.len();
    if n == 0 {
        return Err(FitError::invalid_configuration(
            "cannot optimize a zero-dimensional point",
        ));
    }

    // initial simplex: x0 plus one vertex per coordinate perturbation
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    simplex.push(x0.to_vec());
    for i in 0..n {
        let mut v = x0.to_vec();
        if v[i] != 0.0 {
            v[i] *= 1.05;
        } else {
            v[i] = 0.00025;
        }
        simplex.push(v);
    }
    let mut values: Vec<f64> = simplex.iter().map(|v| f(v)).collect();

    for _ in 0..opts.max_iterations {
        // order best → worst
        let mut order: Vec<usize> = (0..=n).collect();
        order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));
        let best = order[0];
        let second_worst = order[n - 1];
        let worst = order[n];

        if converged(&simplex, &values, best, worst, opts) {
            return Ok(simplex[best].clone());
        }

        // centroid of all but the worst vertex
        let mut centroid = vec![0.0; n];
        for &idx in order.iter().take(n) {
            for (c, &s) in centroid.iter_mut().zip(&simplex[idx]) {
                *c += s / n as f64;
            }
        }

        let reflected = blend(&centroid, &simplex[worst], 1.0 + ALPHA, -ALPHA);
        let f_reflected = f(&reflected);

        if f_reflected < values[best] {
            let expanded = blend(&centroid, &simplex[worst], 1.0 + ALPHA * GAMMA, -ALPHA * GAMMA);
            let f_expanded = f(&expanded);
            if f_expanded < f_reflected {
                simplex[worst] = expanded;
                values[worst] = f_expanded;
            } else {
                simplex[worst] = reflected;
                values[worst] = f_reflected;
            }
        } else if f_reflected < values[second_worst] {
            simplex[worst] = reflected;
            values[worst] = f_reflected;
        } else if f_reflected < values[worst] {
            // outside contraction
            let contracted = blend(&centroid, &reflected, 1.0 - RHO, RHO);
            let f_contracted = f(&contracted);
            if f_contracted <= f_reflected {
                simplex[worst] = contracted;
                values[worst] = f_contracted;
            } else {
                shrink(&mut simplex, &mut values, best, &f);
            }
        } else {
            // inside contraction
            let contracted = blend(&centroid, &simplex[worst], 1.0 - RHO, RHO);
            let f_contracted = f(&contracted);
            if f_contracted < values[worst] {
                simplex[worst] = contracted;
                values[worst] = f_contracted;
            } else {
                shrink(&mut simplex, &mut values, best, &f);
            }
        }
    }

    Err(FitError::did_not_converge(
        "nelder-mead",
        opts.max_iterations,
    ))
}

fn converged(
    simplex: &[Vec<f64>],
    values: &[f64],
    best: usize,
    worst: usize,
    opts: &NelderMeadOptions,
) -> bool {
    let f_spread = (values[worst] - values[best]).abs();
    let x_spread = simplex
        .iter()
        .map(|v| {
            v.iter()
                .zip(&simplex[best])
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max)
        })
        .fold(0.0, f64::max);

    f_spread <= opts.f_tolerance && x_spread <= opts.x_tolerance
}

/// `wa·a + wb·b` componentwise.
fn blend(a: &[f64], b: &[f64], wa: f64, wb: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(&ai, &bi)| wa * ai + wb * bi).collect()
}

fn shrink<F>(simplex: &mut [Vec<f64>], values: &mut [f64], best: usize, f: &F)
where
    F: Fn(&[f64]) -> f64,
{
    let anchor = simplex[best].clone();
    for i in 0..simplex.len() {
        if i == best {
            continue;
        }
        simplex[i] = blend(&anchor, &simplex[i], 1.0 - SIGMA, SIGMA);
        values[i] = f(&simplex[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quadratic_bowl() {
        let f = |p: &[f64]| (p[0] - 3.0).powi(2) + (p[1] + 1.0).powi(2);
        let min = nelder_mead(f, &[0.0, 0.0], &NelderMeadOptions::default()).unwrap();
        assert_abs_diff_eq!(min[0], 3.0, epsilon = 1e-4);
        assert_abs_diff_eq!(min[1], -1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rosenbrock() {
        let f = |p: &[f64]| (1.0 - p[0]).powi(2) + 100.0 * (p[1] - p[0] * p[0]).powi(2);
        let opts = NelderMeadOptions {
            max_iterations: 5000,
            ..Default::default()
        };
        let min = nelder_mead(f, &[-1.2, 1.0], &opts).unwrap();
        assert_abs_diff_eq!(min[0], 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(min[1], 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_one_dimensional() {
        let f = |p: &[f64]| (p[0] - 2.5).powi(2);
        let min = nelder_mead(f, &[10.0], &NelderMeadOptions::default()).unwrap();
        assert_abs_diff_eq!(min[0], 2.5, epsilon = 1e-4);
    }

    #[test]
    fn test_iteration_cap() {
        let f = |p: &[f64]| (p[0] - 3.0).powi(2);
        let opts = NelderMeadOptions {
            max_iterations: 2,
            ..Default::default()
        };
        let result = nelder_mead(f, &[100.0], &opts);
        assert!(matches!(result, Err(FitError::DidNotConverge { .. })));
    }

    #[test]
    fn test_empty_input() {
        let result = nelder_mead(|_| 0.0, &[], &NelderMeadOptions::default());
        assert!(matches!(result, Err(FitError::InvalidConfiguration { .. })));
    }
}
