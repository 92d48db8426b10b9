use crate::constants::{LIGHT_YEARS_PER_PARSEC, PARSECS_PER_KILOPARSEC};
use crate::{CoordError, CoordResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated positive distance, stored in kiloparsecs.
///
/// Galactic-structure work lives on the kiloparsec scale, so that is the
/// base unit here; constructors accept the other common units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    kiloparsecs: f64,
}

impl Distance {
    /// Creates a Distance from kiloparsecs.
    ///
    /// # Errors
    /// Returns `CoordError::InvalidDistance` if value is ≤0, infinite, or NaN.
    pub fn from_kiloparsecs(kiloparsecs: f64) -> CoordResult<Self> {
        if !kiloparsecs.is_finite() || kiloparsecs <= 0.0 {
            return Err(CoordError::invalid_distance(format!(
                "Distance must be positive and finite, got {} kpc",
                kiloparsecs
            )));
        }
        Ok(Self { kiloparsecs })
    }

    pub fn from_parsecs(parsecs: f64) -> CoordResult<Self> {
        Self::from_kiloparsecs(parsecs / PARSECS_PER_KILOPARSEC)
    }

    pub fn from_light_years(ly: f64) -> CoordResult<Self> {
        Self::from_parsecs(ly / LIGHT_YEARS_PER_PARSEC)
    }

    /// Distance from a trigonometric parallax in arcseconds
    /// (parsecs = 1 / parallax).
    pub fn from_parallax_arcsec(parallax_arcsec: f64) -> CoordResult<Self> {
        if !parallax_arcsec.is_finite() || parallax_arcsec <= 0.0 {
            return Err(CoordError::invalid_distance(format!(
                "Parallax must be positive and finite, got {} arcsec",
                parallax_arcsec
            )));
        }
        Self::from_parsecs(1.0 / parallax_arcsec)
    }

    pub fn from_parallax_milliarcsec(parallax_mas: f64) -> CoordResult<Self> {
        Self::from_parallax_arcsec(parallax_mas / 1000.0)
    }

    pub fn kiloparsecs(self) -> f64 {
        self.kiloparsecs
    }

    pub fn parsecs(self) -> f64 {
        self.kiloparsecs * PARSECS_PER_KILOPARSEC
    }

    pub fn light_years(self) -> f64 {
        self.parsecs() * LIGHT_YEARS_PER_PARSEC
    }

    /// m - M, the apparent-minus-absolute magnitude difference at this distance.
    pub fn distance_modulus(self) -> f64 {
        5.0 * libm::log10(self.parsecs()) - 5.0
    }
}

impl std::ops::Add for Distance {
    type Output = CoordResult<Self>;

    fn add(self, other: Self) -> Self::Output {
        Self::from_kiloparsecs(self.kiloparsecs + other.kiloparsecs)
    }
}

impl std::ops::Sub for Distance {
    type Output = CoordResult<Self>;

    fn sub(self, other: Self) -> Self::Output {
        Self::from_kiloparsecs(self.kiloparsecs - other.kiloparsecs)
    }
}

impl std::ops::Mul<f64> for Distance {
    type Output = CoordResult<Self>;

    fn mul(self, factor: f64) -> Self::Output {
        Self::from_kiloparsecs(self.kiloparsecs * factor)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.kiloparsecs.partial_cmp(&other.kiloparsecs)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kiloparsecs < 1.0 {
            write!(f, "{:.3} pc", self.parsecs())
        } else {
            write!(f, "{:.3} kpc", self.kiloparsecs)
        }
    }
}
