//! Percentile summaries for posterior samples.

use crate::{FitError, FitResult};
use std::cmp::Ordering;

/// The p-th percentile (0-100) with linear interpolation between order
/// statistics. Sorts `values` in place.
pub fn percentile(values: &mut [f64], p: f64) -> FitResult<f64> {
    if values.is_empty() {
        return Err(FitError::degenerate("no samples to summarize"));
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(FitError::invalid_configuration(format!(
            "percentile must lie in [0, 100], got {}",
            p
        )));
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let rank = p / 100.0 * (values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Ok(values[lo] + (values[hi] - values[lo]) * frac)
}

pub fn median(values: &mut [f64]) -> FitResult<f64> {
    percentile(values, 50.0)
}
