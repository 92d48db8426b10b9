//! The validated input container for the fitters.

use crate::{FitError, FitResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Four equal-length columns: x, y, and their 1-sigma uncertainties.
///
/// Validation happens once at construction; the fitters then consume the
/// columns without re-checking. Uncertainties become inverse-variance
/// weights downstream, so they must be strictly positive and finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
    x_err: Vec<f64>,
    y_err: Vec<f64>,
}

impl SampleSet {
    /// # Errors
    ///
    /// - `MismatchedLengths` if the four columns differ in length
    /// - `InsufficientData` with fewer than two points
    /// - `InvalidSample` for non-finite x or y values
    /// - `InvalidUncertainty` for non-positive or non-finite uncertainties
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        x_err: Vec<f64>,
        y_err: Vec<f64>,
    ) -> FitResult<Self> {
        if x.len() != y.len() || x.len() != x_err.len() || x.len() != y_err.len() {
            return Err(FitError::MismatchedLengths {
                x: x.len(),
                y: y.len(),
                x_err: x_err.len(),
                y_err: y_err.len(),
            });
        }
        if x.len() < 2 {
            return Err(FitError::InsufficientData {
                got: x.len(),
                need: 2,
            });
        }

        for (i, (&xi, &yi)) in x.iter().zip(&y).enumerate() {
            if !xi.is_finite() || !yi.is_finite() {
                return Err(FitError::invalid_sample(
                    i,
                    format!("non-finite point ({}, {})", xi, yi),
                ));
            }
        }
        for (i, &e) in x_err.iter().chain(&y_err).enumerate() {
            if !e.is_finite() || e <= 0.0 {
                return Err(FitError::InvalidUncertainty {
                    index: i % x.len(),
                    value: e,
                });
            }
        }

        Ok(Self { x, y, x_err, y_err })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn x_err(&self) -> &[f64] {
        &self.x_err
    }

    pub fn y_err(&self) -> &[f64] {
        &self.y_err
    }
}
