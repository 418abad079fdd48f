//! Salary-banded interest rate model
//!
//! Borrowers at or below the lower threshold pay RPI only. Above the upper
//! threshold they pay RPI plus the full variable interest. Between the two
//! the variable part is interpolated linearly on salary.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, LoanError, LoanResult};

/// Base rate charged to every borrower
pub const RPI: f64 = 0.03;

/// Extra interest charged in full above the upper threshold
pub const VARIABLE_INTEREST: f64 = 0.03;

pub const LOWER_REPAYMENT_THRESHOLD: f64 = 25_000.0;
pub const UPPER_REPAYMENT_THRESHOLD: f64 = 45_000.0;

/// Interest rate bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestTerms {
    /// Base annual rate
    pub rpi: f64,
    /// Maximum additional annual rate
    pub variable_interest: f64,
    /// Salary at or below which only RPI applies
    pub lower_threshold: f64,
    /// Salary at or above which the full variable interest applies
    pub upper_threshold: f64,
}

impl Default for InterestTerms {
    fn default() -> Self {
        Self {
            rpi: RPI,
            variable_interest: VARIABLE_INTEREST,
            lower_threshold: LOWER_REPAYMENT_THRESHOLD,
            upper_threshold: UPPER_REPAYMENT_THRESHOLD,
        }
    }
}

impl InterestTerms {
    /// Annual interest rate charged for a given annual salary
    pub fn salary_to_interest_rate(&self, annual_salary: f64) -> LoanResult<f64> {
        let annual_salary = ensure_finite("annual_salary", annual_salary)?;
        if annual_salary < 0.0 {
            return Err(LoanError::NegativeSalary(annual_salary));
        }

        if annual_salary <= self.lower_threshold {
            Ok(self.rpi)
        } else if annual_salary >= self.upper_threshold {
            Ok(self.rpi + self.variable_interest)
        } else {
            let position = (annual_salary - self.lower_threshold)
                / (self.upper_threshold - self.lower_threshold);
            Ok(self.rpi + position * self.variable_interest)
        }
    }

    /// Highest rate any borrower can be charged
    pub fn max_rate(&self) -> f64 {
        self.rpi + self.variable_interest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_negative_salary_rejected() {
        let terms = InterestTerms::default();
        assert!(matches!(
            terms.salary_to_interest_rate(-0.01),
            Err(LoanError::NegativeSalary(_))
        ));
    }

    #[test]
    fn test_bracket_boundaries() {
        let terms = InterestTerms::default();
        assert_abs_diff_eq!(terms.salary_to_interest_rate(0.0).unwrap(), 0.03, epsilon = 1e-12);
        assert_abs_diff_eq!(terms.salary_to_interest_rate(25_000.0).unwrap(), 0.03, epsilon = 1e-12);
        assert_abs_diff_eq!(terms.salary_to_interest_rate(45_000.0).unwrap(), 0.06, epsilon = 1e-12);
        assert_abs_diff_eq!(terms.salary_to_interest_rate(90_000.0).unwrap(), 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoint_interpolation() {
        let terms = InterestTerms::default();
        assert_abs_diff_eq!(terms.salary_to_interest_rate(35_000.0).unwrap(), 0.045, epsilon = 1e-12);
    }

    #[test]
    fn test_continuous_at_thresholds() {
        let terms = InterestTerms::default();
        let just_above_lower = terms.salary_to_interest_rate(25_000.01).unwrap();
        let just_below_upper = terms.salary_to_interest_rate(44_999.99).unwrap();
        assert_abs_diff_eq!(just_above_lower, 0.03, epsilon = 1e-6);
        assert_abs_diff_eq!(just_below_upper, 0.06, epsilon = 1e-6);
    }

    #[test]
    fn test_monotonic_in_salary() {
        let terms = InterestTerms::default();
        let mut previous = terms.salary_to_interest_rate(0.0).unwrap();
        for step in 1..=120 {
            let salary = step as f64 * 500.0;
            let rate = terms.salary_to_interest_rate(salary).unwrap();
            assert!(rate >= previous, "rate fell at salary {}", salary);
            previous = rate;
        }
        assert_abs_diff_eq!(previous, terms.max_rate(), epsilon = 1e-12);
    }
}
