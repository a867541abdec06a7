//! Error types for statistical operations
//!
//! Failures from the underlying numeric routines are wrapped at the
//! boundary into a small closed set of variants instead of escaping as
//! dependency-specific errors.

use thiserror::Error;

/// Error type for sample statistics and interval estimation
#[derive(Error, Debug)]
pub enum Error {
    /// The sample itself is unusable (empty, or contains NaN/infinite values)
    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    /// The sample is too small for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Confidence level outside the open interval (0, 1)
    #[error("Invalid confidence level: {0} (must be in (0, 1))")]
    InvalidConfidenceLevel(f64),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_sample() -> Self {
        Self::InvalidSample("sample is empty".to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite() -> Self {
        Self::InvalidSample("sample contains NaN or infinite values".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSample("sample is empty".to_string());
        assert_eq!(err.to_string(), "Invalid sample: sample is empty");

        let err = Error::InsufficientData {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 3 samples, got 2"
        );

        let err = Error::InvalidConfidenceLevel(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid confidence level: 1.5 (must be in (0, 1))"
        );

        let err = Error::Computation("zero range".to_string());
        assert_eq!(err.to_string(), "Computation error: zero range");
    }

    #[test]
    fn test_error_helpers() {
        match Error::empty_sample() {
            Error::InvalidSample(msg) => assert!(msg.contains("empty")),
            _ => panic!("Wrong error type"),
        }

        match Error::non_finite() {
            Error::InvalidSample(msg) => assert!(msg.contains("NaN")),
            _ => panic!("Wrong error type"),
        }
    }
}
