//! Error types for moving average computations.
//!
//! Every precondition violation is reported through [`MaError`]. Errors are
//! raised before any output buffer is allocated, so a failed call never
//! produces a partial result.

use thiserror::Error;

/// Result type alias for moving average operations that may fail.
pub type Result<T> = core::result::Result<T, MaError>;

/// Errors that can occur during price extraction or moving average computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaError {
    /// The input series contains no data points.
    #[error("Empty series: at least one data point is required")]
    EmptySeries,

    /// A period or weight parameter is outside `1..=max`.
    #[error("Invalid parameter '{name}': {value} (expected 1..={max})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value.
        value: usize,
        /// Largest accepted value (the series length).
        max: usize,
    },
}

impl MaError {
    /// Create an [`MaError::InvalidParameter`] for `name`.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, value: usize, max: usize) -> Self {
        Self::InvalidParameter { name, value, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaError::EmptySeries;
        assert_eq!(
            err.to_string(),
            "Empty series: at least one data point is required"
        );

        let err = MaError::invalid_parameter("period", 0, 10);
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'period': 0 (expected 1..=10)"
        );
    }

    #[test]
    fn test_invalid_parameter_fields() {
        match MaError::invalid_parameter("weight", 12, 5) {
            MaError::InvalidParameter { name, value, max } => {
                assert_eq!(name, "weight");
                assert_eq!(value, 12);
                assert_eq!(max, 5);
            }
            other => panic!("Expected InvalidParameter, got {other:?}"),
        }
    }
}
