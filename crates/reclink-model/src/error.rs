//! Error types for record comparison.

use std::fmt;

use thiserror::Error;

/// Boxed error returned by a fallible field comparator.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which of the two Fellegi-Sunter parameters an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// m: probability a field agrees given the records truly match.
    MatchProbability,
    /// u: probability a field agrees given the records truly do not match.
    UnmatchProbability,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchProbability => f.write_str("match probability"),
            Self::UnmatchProbability => f.write_str("unmatch probability"),
        }
    }
}

/// Errors from comparing two records.
///
/// The built-in comparators never produce these for well-formed input. They
/// come from validating constructors and from custom fallible comparators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComparisonError {
    /// m or u lies outside the open interval (0, 1).
    #[error("field '{key}': {parameter} must lie strictly between 0 and 1, got {value}")]
    InvalidProbability {
        key: String,
        parameter: Parameter,
        value: f64,
    },

    /// A custom comparator failed on a field.
    #[error("field '{key}': comparator failed: {source}")]
    Predicate {
        key: String,
        #[source]
        source: PredicateError,
    },
}

impl ComparisonError {
    /// The field key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::InvalidProbability { key, .. } | Self::Predicate { key, .. } => key,
        }
    }
}

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, ComparisonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ComparisonError::InvalidProbability {
            key: "ssn".to_string(),
            parameter: Parameter::UnmatchProbability,
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "field 'ssn': unmatch probability must lie strictly between 0 and 1, got 0"
        );
        assert_eq!(err.key(), "ssn");
    }

    #[test]
    fn test_predicate_error_keeps_source() {
        let err = ComparisonError::Predicate {
            key: "address".to_string(),
            source: "malformed address JSON".into(),
        };
        assert_eq!(
            err.to_string(),
            "field 'address': comparator failed: malformed address JSON"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
