//! Ordinary least squares, used to seed both error-in-variables fitters.

use crate::{FitError, FitResult, Line, SampleSet};

/// Unweighted least-squares line through the sample points.
///
/// Ignores the uncertainty columns entirely; both [`fit_mcmc`](crate::fit_mcmc)
/// and [`fit_odr`](crate::fit_odr) use this only as a starting guess.
///
/// # Errors
/// `Degenerate` when all x values coincide (the slope is undefined).
pub fn fit_ols(data: &SampleSet) -> FitResult<Line> {
    let n = data.len() as f64;

    let mean_x: f64 = data.x().iter().sum::<f64>() / n;
    let mean_y: f64 = data.y().iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in data.x().iter().zip(data.y()) {
        sxx += (xi - mean_x) * (xi - mean_x);
        sxy += (xi - mean_x) * (yi - mean_y);
    }

    if sxx == 0.0 {
        return Err(FitError::degenerate(
            "all abscissae identical, slope undefined",
        ));
    }

    let slope = sxy / sxx;
    Ok(Line::new(slope, mean_y - slope * mean_x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample(x: Vec<f64>, y: Vec<f64>) -> SampleSet {
        let n = x.len();
        SampleSet::new(x, y, vec![0.1; n], vec![0.1; n]).unwrap()
    }

    #[test]
    fn test_exact_line() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|&v| -1.5 * v + 4.0).collect();
        let line = fit_ols(&sample(x, y)).unwrap();
        assert_abs_diff_eq!(line.slope, -1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(line.intercept, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_points() {
        let line = fit_ols(&sample(vec![0.0, 2.0], vec![1.0, 5.0])).unwrap();
        assert_abs_diff_eq!(line.slope, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(line.intercept, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_x() {
        let result = fit_ols(&sample(vec![1.0, 1.0, 1.0], vec![1.0, 2.0, 3.0]));
        assert!(matches!(result, Err(FitError::Degenerate { .. })));
    }
}
