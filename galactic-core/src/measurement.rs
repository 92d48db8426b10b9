//! A scalar value with an optional symmetric 1-sigma uncertainty.
//!
//! [`Measurement`] is the explicit tagged form of the "value or
//! (value, error) pair" convention: the uncertainty is an `Option`, and
//! downstream code branches on [`has_uncertainty`](Measurement::has_uncertainty)
//! instead of inspecting argument shapes. A routine that propagates errors
//! requires every operand on the propagation path to carry one, and fails
//! loudly when the caller left one out.

use crate::{CoreError, CoreResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    value: f64,
    uncertainty: Option<f64>,
}

impl Measurement {
    /// Creates a measurement with no uncertainty attached.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidMeasurement` if the value is NaN or infinite.
    pub fn exact(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_measurement(format!(
                "value must be finite, got {}",
                value
            )));
        }
        Ok(Self {
            value,
            uncertainty: None,
        })
    }

    /// Creates a measurement carrying a symmetric 1-sigma uncertainty.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidMeasurement` if the value is not finite,
    /// or if the uncertainty is negative, NaN, or infinite.
    pub fn with_uncertainty(value: f64, sigma: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_measurement(format!(
                "value must be finite, got {}",
                value
            )));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(CoreError::invalid_measurement(format!(
                "uncertainty must be finite and non-negative, got {}",
                sigma
            )));
        }
        Ok(Self {
            value,
            uncertainty: Some(sigma),
        })
    }

    pub fn value(self) -> f64 {
        self.value
    }

    pub fn uncertainty(self) -> Option<f64> {
        self.uncertainty
    }

    pub fn has_uncertainty(self) -> bool {
        self.uncertainty.is_some()
    }

    /// The same central value with the uncertainty dropped.
    pub fn central(self) -> Self {
        Self {
            value: self.value,
            uncertainty: None,
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.uncertainty {
            Some(sigma) => write!(f, "{} ± {}", self.value, sigma),
            None => write!(f, "{}", self.value),
        }
    }
}
