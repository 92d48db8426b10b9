use thiserror::Error;

pub type FitResult<T> = Result<T, FitError>;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("Mismatched input lengths: x = {x}, y = {y}, x_err = {x_err}, y_err = {y_err}")]
    MismatchedLengths {
        x: usize,
        y: usize,
        x_err: usize,
        y_err: usize,
    },

    #[error("Insufficient data: {got} points, need at least {need}")]
    InsufficientData { got: usize, need: usize },

    /// Uncertainties feed inverse-variance weights; zero or negative values
    /// produce divergent weights and are rejected up front.
    #[error("Invalid uncertainty at index {index}: {value} (must be positive and finite)")]
    InvalidUncertainty { index: usize, value: f64 },

    #[error("Invalid sample at index {index}: {message}")]
    InvalidSample { index: usize, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Ensemble moves interpolate between walkers, so the ensemble must be
    /// at least twice the dimension of the sampled space.
    #[error("{walkers} walkers cannot sample a {ndim}-dimensional space: need at least {minimum}")]
    TooFewWalkers {
        walkers: usize,
        ndim: usize,
        minimum: usize,
    },

    #[error("{operation} did not converge after {iterations} iterations")]
    DidNotConverge { operation: String, iterations: usize },

    #[error("Degenerate input: {message}")]
    Degenerate { message: String },
}

impl FitError {
    pub fn invalid_sample(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidSample {
            index,
            message: message.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn too_few_walkers(walkers: usize, ndim: usize) -> Self {
        Self::TooFewWalkers {
            walkers,
            ndim,
            minimum: 2 * ndim,
        }
    }

    pub fn did_not_converge(operation: &str, iterations: usize) -> Self {
        Self::DidNotConverge {
            operation: operation.to_string(),
            iterations,
        }
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_walkers_display() {
        let err = FitError::too_few_walkers(3, 2);
        assert!(err.to_string().contains("3 walkers"));
        assert!(err.to_string().contains("at least 4"));
    }

    #[test]
    fn test_did_not_converge_display() {
        let err = FitError::did_not_converge("york iteration", 100);
        assert!(err.to_string().contains("york iteration"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<FitError>();
        _assert_sync::<FitError>();
    }
}
