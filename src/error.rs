use thiserror::Error;

/// Error raised when a factor or rate conversion is called with inputs outside its domain.
///
/// Every function in the crate validates its arguments before computing and returns
/// this error synchronously. The message names the offending parameter and value.
///
/// # Example
/// ```rust
/// # use intfactors::prelude::*;
/// let err = capital_recovery_factor(1.0, 10).unwrap_err();
/// assert!(matches!(err, FactorError::InvalidArgument(_)));
/// assert!(err.to_string().contains("interest_rate"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorError {
    /// A precondition on an argument was violated (rate out of range, period count of zero).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<garde::Report> for FactorError {
    fn from(report: garde::Report) -> Self {
        FactorError::InvalidArgument(report.to_string().trim_end().to_string())
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_converts_to_invalid_argument() {
        let mut report = garde::Report::new();
        report.append(
            garde::Path::new("num_periods"),
            garde::Error::new("lower than 1"),
        );
        let err = FactorError::from(report);
        let FactorError::InvalidArgument(message) = &err;
        assert!(message.contains("num_periods"));
        assert!(message.contains("lower than 1"));
        assert!(err.to_string().starts_with("invalid argument:"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<FactorError>();
    }
}
