//! Angle normalization.
//!
//! Galactic longitude is cyclic: l = 370° names the same direction as
//! l = 10°, so longitudes **wrap**. Latitude has physical limits: you
//! cannot go past the pole, so latitudes **clamp** (and out-of-range
//! inputs are rejected upstream by [`validate_latitude`](super::validate_latitude)
//! rather than clamped silently).
//!
//! Wrapping goes through `libm::fmod` rather than `%`: Rust's `%` is a
//! remainder and keeps the dividend's sign, which is not what wrapping
//! wants for negative angles.

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [0, 2pi) radians.
///
/// Use for longitudes measured from the Galactic center, azimuths, and
/// other conventionally non-negative cyclic quantities. This is what makes
/// l and l + 360° interchangeable everywhere downstream.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps an angle to [-pi, +pi) radians.
///
/// Use when the discontinuity belongs at the anti-center rather than at
/// zero, e.g. for signed longitude differences.
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w.abs() >= PI {
        return w - TWOPI.copysign(x);
    }

    w
}

/// Clamps a latitude to [-pi/2, +pi/2] radians.
#[inline]
pub fn clamp_lat(x: f64) -> f64 {
    x.clamp(-HALF_PI, HALF_PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_0_2pi() {
        // In range: unchanged
        assert_eq!(wrap_0_2pi(1.0), 1.0);
        // Negative becomes positive: -90° -> 270°
        assert!((wrap_0_2pi(-PI / 2.0) - (3.0 * PI / 2.0)).abs() < 1e-15);
        // Overflow: 3π -> π
        assert!((wrap_0_2pi(3.0 * PI) - PI).abs() < 1e-15);
        // At 2π: wraps to 0
        assert!(wrap_0_2pi(TWOPI).abs() < 1e-15);
    }

    #[test]
    fn test_wrap_pm_pi() {
        assert_eq!(wrap_pm_pi(1.0), 1.0);
        // 270° -> -90°
        assert!((wrap_pm_pi(3.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-15);
        // -270° -> +90°
        assert!((wrap_pm_pi(-3.0 * PI / 2.0) - (PI / 2.0)).abs() < 1e-15);
    }

    #[test]
    fn test_full_turn_equivalence() {
        // l and l + 360° must land on the same wrapped value
        for l in [0.0, 0.3, 2.0, 5.9] {
            assert!((wrap_0_2pi(l + TWOPI) - wrap_0_2pi(l)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_clamp_lat() {
        assert_eq!(clamp_lat(0.5), 0.5);
        assert_eq!(clamp_lat(2.0), HALF_PI);
        assert_eq!(clamp_lat(-2.0), -HALF_PI);
    }
}
