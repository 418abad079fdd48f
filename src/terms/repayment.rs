//! Salary-linked repayment rule

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, LoanError, LoanResult};

/// Share of salary above the threshold that goes to repayment
pub const REPAYMENT_RATE: f64 = 0.09;

/// Annual salary below which nothing is repaid
pub const REPAYMENT_THRESHOLD: f64 = 25_000.0;

/// Repayment terms: a fixed share of annual salary above a threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepaymentTerms {
    /// Share of salary above the threshold repaid each year
    pub rate: f64,
    /// Annual salary at or below which no repayment is owed
    pub threshold: f64,
}

impl Default for RepaymentTerms {
    fn default() -> Self {
        Self {
            rate: REPAYMENT_RATE,
            threshold: REPAYMENT_THRESHOLD,
        }
    }
}

impl RepaymentTerms {
    /// Monthly repayment owed on an annual salary, rounded to pence
    pub fn monthly_repayment(&self, annual_salary: f64) -> LoanResult<f64> {
        let annual_salary = ensure_finite("annual_salary", annual_salary)?;
        if annual_salary < 0.0 {
            return Err(LoanError::NegativeSalary(annual_salary));
        }
        if annual_salary <= self.threshold {
            return Ok(0.0);
        }

        let repayment = self.rate * (annual_salary - self.threshold) / 12.0;
        Ok(round_currency(repayment))
    }
}

/// Round to 2 decimal places
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
