//! ToposError: Unified error type for alpha-topos public APIs
//!
//! Every fallible operation in the crate validates its inputs up front and
//! reports failures through this type instead of panicking.

use thiserror::Error;

/// Unified error type for topology construction and analysis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToposError {
    /// A numeric argument or topology shape is outside the accepted domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    /// A textual label is not exactly two lowercase ASCII letters.
    #[error("invalid label `{0}`: expected two lowercase letters a-z")]
    InvalidLabel(String),
    /// A structural invariant of a built topology does not hold.
    #[error("topology invariant violated: {0}")]
    InvariantViolation(String),
}

impl ToposError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ToposError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for the [`ToposError::InvalidParameter`] kind.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, ToposError::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let err = ToposError::invalid("radius", "must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "invalid parameter `radius`: must be non-negative, got -1"
        );
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn invalid_label_is_not_a_parameter_error() {
        let err = ToposError::InvalidLabel("A1".into());
        assert!(!err.is_invalid_parameter());
        assert!(err.to_string().contains("`A1`"));
    }
}
