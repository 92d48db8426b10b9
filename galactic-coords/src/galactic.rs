//! A direction on the sky in Galactic coordinates.

use crate::{galactocentric, CoordResult, Measurement};
use galactic_core::{math, Angle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Galactic longitude and latitude (IAU 1958 frame).
///
/// Longitude is wrapped to [0°, 360°) on construction, so l and l + 360°
/// produce the same coordinate. Latitude must lie within [-90°, +90°].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GalacticCoordinate {
    l: Angle,
    b: Angle,
}

impl GalacticCoordinate {
    pub fn new(l: Angle, b: Angle) -> CoordResult<Self> {
        let l = l.validate_longitude(true)?;
        let b = b.validate_latitude()?;

        Ok(Self { l, b })
    }

    pub fn from_degrees(l_deg: f64, b_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(l_deg), Angle::from_degrees(b_deg))
    }

    pub fn longitude(&self) -> Angle {
        self.l
    }

    pub fn latitude(&self) -> Angle {
        self.b
    }

    pub fn galactic_center() -> Self {
        Self {
            l: Angle::ZERO,
            b: Angle::ZERO,
        }
    }

    pub fn galactic_anticenter() -> Self {
        Self {
            l: Angle::PI,
            b: Angle::ZERO,
        }
    }

    pub fn north_galactic_pole() -> Self {
        Self {
            l: Angle::ZERO,
            b: Angle::HALF_PI,
        }
    }

    pub fn is_near_galactic_plane(&self) -> bool {
        self.b.abs().degrees() < 10.0
    }

    pub fn is_near_galactic_pole(&self) -> bool {
        self.b.abs().degrees() > 80.0
    }

    pub fn angular_separation(&self, other: &Self) -> Angle {
        let (sin_b1, cos_b1) = self.b.sin_cos();
        let (sin_b2, cos_b2) = other.b.sin_cos();
        let delta_l = (self.l - other.l).radians();

        let angle_rad =
            math::vincenty_angular_separation(sin_b1, cos_b1, sin_b2, cos_b2, delta_l);

        Angle::from_radians(angle_rad)
    }

    /// Galactocentric distance of an object seen along this direction at
    /// the given heliocentric distance, using the default solar reference.
    ///
    /// See [`helio_to_galactocentric`](crate::helio_to_galactocentric).
    pub fn galactocentric_distance(&self, helio: Measurement) -> CoordResult<Measurement> {
        galactocentric::helio_to_galactocentric(self, helio)
    }

    /// Same as [`galactocentric_distance`](Self::galactocentric_distance)
    /// with an explicit solar reference distance.
    pub fn galactocentric_distance_with_sun(
        &self,
        helio: Measurement,
        sun: Measurement,
    ) -> CoordResult<Measurement> {
        galactocentric::helio_to_galactocentric_with_sun(self, helio, sun)
    }
}
