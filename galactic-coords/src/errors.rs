use galactic_core::CoreError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error)]
pub enum CoordError {
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Invalid distance: {message}")]
    InvalidDistance { message: String },

    /// The caller asked for uncertainty propagation without supplying the
    /// solar-distance uncertainty. Never silently defaulted.
    #[error("solar distance uncertainty required when object distance uncertainty is given")]
    MissingSolarUncertainty,

    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    #[error("Scalar validation failed: {source}")]
    Core {
        #[from]
        source: CoreError,
    },
}

impl CoordError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn invalid_distance(message: impl Into<String>) -> Self {
        Self::InvalidDistance {
            message: message.into(),
        }
    }

    pub fn degenerate_geometry(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_solar_uncertainty_display() {
        let err = CoordError::MissingSolarUncertainty;
        assert_eq!(
            err.to_string(),
            "solar distance uncertainty required when object distance uncertainty is given"
        );
    }

    #[test]
    fn test_invalid_distance_display() {
        let err = CoordError::invalid_distance("got -1");
        assert!(err.to_string().contains("got -1"));
    }

    #[test]
    fn test_from_core() {
        let core = CoreError::invalid_measurement("bad sigma");
        let err: CoordError = core.into();
        assert!(err.to_string().contains("bad sigma"));
    }
}
