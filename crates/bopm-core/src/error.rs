//! Error types for lattice construction.

use thiserror::Error;

/// A specialized Result type for lattice operations.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Errors that can occur while building or pricing a lattice.
///
/// Economically inconsistent inputs (for example a risk-neutral probability
/// outside `[0, 1]`) are not errors: the lattice is computed as the formulas
/// dictate and it is up to the caller to warn about it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// A parameter makes the time step undefined or degenerate.
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        field: &'static str,
        /// Description of the constraint that was violated.
        reason: String,
    },
}

impl LatticeError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LatticeError::invalid_parameter("periods", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'periods': must be at least 1, got 0"
        );
    }
}
