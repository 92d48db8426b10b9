//! The fitted line and its normal-vector parametrization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The normal-vector parametrization θ of this line.
    ///
    /// θ points from the origin perpendicular to the line and has length
    /// equal to the line's distance from the origin:
    /// `θ = (-b·a/(1+a²), b/(1+a²))`. Slope-intercept space is singular for
    /// steep lines and biases orthogonal-distance likelihoods; the sampler
    /// and optimizer both work in θ space instead.
    pub fn to_normal_vector(&self) -> [f64; 2] {
        let denom = 1.0 + self.slope * self.slope;
        [
            -self.intercept * self.slope / denom,
            self.intercept / denom,
        ]
    }

    /// Inverse of [`to_normal_vector`](Self::to_normal_vector):
    /// `a = -θ₀/θ₁`, `b = (θ·θ)/θ₁`.
    ///
    /// θ₁ = 0 describes a vertical line, which has no slope-intercept form;
    /// the division then yields infinities the caller's prior or bounds are
    /// expected to exclude.
    pub fn from_normal_vector(theta: [f64; 2]) -> Self {
        let slope = -theta[0] / theta[1];
        let intercept = (theta[0] * theta[0] + theta[1] * theta[1]) / theta[1];
        Self { slope, intercept }
    }
}
