use super::core::Angle;
use crate::constants::HALF_PI;
use crate::{CoreError, CoreResult, NumericErrorKind};

/// Validates a longitude.
///
/// - `normalize = true`: any finite value is accepted and wrapped to
///   [0°, 360°), so l and l + 360° validate to the same angle.
/// - `normalize = false`: the value must already lie in [0°, 360°).
pub fn validate_longitude(angle: Angle, normalize: bool) -> CoreResult<Angle> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(CoreError::numeric(
            "validate_longitude",
            NumericErrorKind::NotFinite,
            "longitude not finite",
        ));
    }

    if normalize {
        return Ok(angle.wrapped_0_2pi());
    }

    if (0.0..crate::constants::TWOPI).contains(&rad) {
        return Ok(angle);
    }

    Err(CoreError::numeric(
        "validate_longitude",
        NumericErrorKind::OutOfRange,
        &format!("longitude {:.2}° out of range [0°, 360°)", angle.degrees()),
    ))
}

/// Validates a latitude: finite and within [-90°, +90°].
pub fn validate_latitude(angle: Angle) -> CoreResult<Angle> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(CoreError::numeric(
            "validate_latitude",
            NumericErrorKind::NotFinite,
            "latitude not finite",
        ));
    }

    if (-HALF_PI..=HALF_PI).contains(&rad) {
        return Ok(angle);
    }

    Err(CoreError::numeric(
        "validate_latitude",
        NumericErrorKind::OutOfRange,
        &format!("latitude {:.2}° past the pole", angle.degrees()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    #[test]
    fn test_longitude_wraps_when_normalizing() {
        let a = validate_longitude(Angle::from_degrees(540.0), true).unwrap();
        assert!((a.degrees() - 180.0).abs() < 1e-9);

        let b = validate_longitude(Angle::from_degrees(-90.0), true).unwrap();
        assert!((b.degrees() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_strict_range() {
        assert!(validate_longitude(Angle::from_degrees(359.0), false).is_ok());
        assert!(validate_longitude(Angle::from_degrees(361.0), false).is_err());
    }

    #[test]
    fn test_longitude_not_finite() {
        let result = validate_longitude(Angle::from_radians(f64::NAN), true);
        assert!(matches!(
            result,
            Err(CoreError::Numeric {
                kind: NumericErrorKind::NotFinite,
                ..
            })
        ));
    }

    #[test]
    fn test_latitude_in_range() {
        assert!(validate_latitude(Angle::from_degrees(-90.0)).is_ok());
        assert!(validate_latitude(Angle::from_degrees(90.0)).is_ok());
        assert!(validate_latitude(Angle::from_degrees(0.0)).is_ok());
    }

    #[test]
    fn test_latitude_past_pole() {
        let result = validate_latitude(Angle::from_degrees(90.5));
        assert!(matches!(
            result,
            Err(CoreError::Numeric {
                kind: NumericErrorKind::OutOfRange,
                ..
            })
        ));
    }
}
