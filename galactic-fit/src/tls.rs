//! Total-least-squares log-likelihood.
//!
//! The usual chi-square penalizes vertical residuals only, which is wrong
//! when the x values carry noise too. Here each point contributes the
//! Gaussian log-density of its *perpendicular* deviation from the line,
//! with the point's covariance projected onto the line's normal direction
//! (Hogg, Bovy & Lang 2010, eq. 29-32):
//!
//! ```text
//! δᵢ = (xᵢ, yᵢ)·v̂ - |θ|            perpendicular offset
//! Σᵢ = v̂ᵀ diag(σxᵢ², σyᵢ²) v̂      projected variance
//! ln L = -½ Σᵢ [ ln(2π Σᵢ) + δᵢ²/Σᵢ ]
//! ```
//!
//! θ is the normal-vector parametrization of [`Line`](crate::Line) and v̂
//! its unit direction.

use crate::SampleSet;
use std::f64::consts::PI;

/// Log-likelihood of the line described by `theta` given the samples.
///
/// Pure function of its arguments; returns `-inf` for the zero vector
/// (which describes no line).
pub fn tls_log_likelihood(theta: [f64; 2], data: &SampleSet) -> f64 {
    let norm = libm::hypot(theta[0], theta[1]);
    if norm == 0.0 {
        return f64::NEG_INFINITY;
    }
    let vx = theta[0] / norm;
    let vy = theta[1] / norm;

    let mut ll = 0.0;
    for i in 0..data.len() {
        let delta = data.x()[i] * vx + data.y()[i] * vy - norm;
        let sigma2 = (vx * data.x_err()[i]).powi(2) + (vy * data.y_err()[i]).powi(2);
        ll -= 0.5 * (libm::log(2.0 * PI * sigma2) + delta * delta / sigma2);
    }

    ll
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Line;

    fn on_line(slope: f64, intercept: f64, x: &[f64], err: f64) -> SampleSet {
        let y: Vec<f64> = x.iter().map(|&v| slope * v + intercept).collect();
        SampleSet::new(x.to_vec(), y, vec![err; x.len()], vec![err; x.len()]).unwrap()
    }

    #[test]
    fn test_true_line_beats_perturbed() {
        let data = on_line(-1.0, 4.5, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 0.1);
        let truth = Line::new(-1.0, 4.5).to_normal_vector();
        let off_slope = Line::new(-1.2, 4.5).to_normal_vector();
        let off_intercept = Line::new(-1.0, 5.0).to_normal_vector();

        let ll_truth = tls_log_likelihood(truth, &data);
        assert!(ll_truth > tls_log_likelihood(off_slope, &data));
        assert!(ll_truth > tls_log_likelihood(off_intercept, &data));
    }

    #[test]
    fn test_perpendicular_not_vertical() {
        // a steep line: the vertical residual is large but the
        // perpendicular one stays small, and the likelihood must follow
        // the perpendicular one
        let steep = on_line(-4.0, 8.0, &[0.0, 0.5, 1.0, 1.5, 2.0], 0.05);
        let truth = Line::new(-4.0, 8.0).to_normal_vector();
        let shifted = Line::new(-4.0, 8.2).to_normal_vector();
        assert!(tls_log_likelihood(truth, &steep) > tls_log_likelihood(shifted, &steep));
    }

    #[test]
    fn test_zero_vector_rejected() {
        let data = on_line(-1.0, 4.5, &[0.0, 1.0, 2.0], 0.1);
        assert_eq!(tls_log_likelihood([0.0, 0.0], &data), f64::NEG_INFINITY);
    }

    #[test]
    fn test_scale_of_theta_matters() {
        // θ and 2θ describe different lines (different origin distance):
        // the likelihood must distinguish them
        let data = on_line(-1.0, 4.5, &[0.0, 1.0, 2.0, 3.0], 0.1);
        let theta = Line::new(-1.0, 4.5).to_normal_vector();
        let doubled = [2.0 * theta[0], 2.0 * theta[1]];
        assert!(tls_log_likelihood(theta, &data) > tls_log_likelihood(doubled, &data));
    }
}
