//! Error types for loan projections

use thiserror::Error;

/// Errors raised by the projection library
///
/// Everything except [`LoanError::TermsFile`] is an input validation failure
/// and is raised before any month is simulated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoanError {
    #[error("Received {0:.2}: negative salary is invalid")]
    NegativeSalary(f64),

    #[error("Received {0:.2}: negative balance is invalid")]
    NegativeBalance(f64),

    #[error("Invalid input: {field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Invalid loan terms: {0}")]
    InvalidTerms(String),

    #[error("Unable to read loan terms: {0}")]
    TermsFile(String),
}

impl LoanError {
    /// True for caller mistakes (bad salary, balance, date or terms)
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, LoanError::TermsFile(_))
    }
}

impl From<std::io::Error> for LoanError {
    fn from(e: std::io::Error) -> Self {
        LoanError::TermsFile(e.to_string())
    }
}

impl From<serde_json::Error> for LoanError {
    fn from(e: serde_json::Error) -> Self {
        LoanError::TermsFile(e.to_string())
    }
}

pub type LoanResult<T> = Result<T, LoanError>;

/// Reject NaN and infinities before they reach the arithmetic
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> LoanResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoanError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_salary_message() {
        let err = LoanError::NegativeSalary(-5.0);
        assert_eq!(err.to_string(), "Received -5.00: negative salary is invalid");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_terms_file_is_not_input_error() {
        let err = LoanError::TermsFile("missing".to_string());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("salary", 1.5), Ok(1.5));
        assert!(matches!(
            ensure_finite("salary", f64::NAN),
            Err(LoanError::NonFinite { field: "salary", .. })
        ));
    }
}
