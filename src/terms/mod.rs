//! Loan terms: repayment rule, interest bracket and salary growth

mod repayment;
mod interest;
mod growth;
pub mod loader;

pub use repayment::{RepaymentTerms, round_currency, REPAYMENT_RATE, REPAYMENT_THRESHOLD};
pub use interest::{
    InterestTerms, LOWER_REPAYMENT_THRESHOLD, RPI, UPPER_REPAYMENT_THRESHOLD, VARIABLE_INTEREST,
};
pub use growth::SalaryGrowth;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LoanError, LoanResult};

/// Years after which any outstanding balance is written off
pub const DEFAULT_TERM_YEARS: u32 = 30;

/// Container for all policy parameters of a loan
///
/// Immutable once handed to a simulator, so independent runs with different
/// terms can proceed side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanTerms {
    pub repayment: RepaymentTerms,
    pub interest: InterestTerms,
    pub salary_growth: SalaryGrowth,
    /// Projection horizon in years
    pub term_years: u32,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            repayment: RepaymentTerms::default(),
            interest: InterestTerms::default(),
            salary_growth: SalaryGrowth::default(),
            term_years: DEFAULT_TERM_YEARS,
        }
    }
}

impl LoanTerms {
    /// Default terms with a different salary growth model
    pub fn with_salary_growth(salary_growth: SalaryGrowth) -> Self {
        Self {
            salary_growth,
            ..Self::default()
        }
    }

    /// Load terms from a JSON file; missing fields take their defaults
    pub fn from_json_path(path: &Path) -> LoanResult<Self> {
        let terms = loader::load_terms(path)?;
        terms.validate()?;
        Ok(terms)
    }

    /// Number of months in the projection horizon
    pub fn term_months(&self) -> u32 {
        self.term_years * 12
    }

    /// Annual factor applied to salary each January
    pub fn salary_growth_factor(&self) -> f64 {
        self.salary_growth.annual_factor(self.interest.rpi)
    }

    /// Check the terms are internally consistent
    pub fn validate(&self) -> LoanResult<()> {
        let rates = [
            ("repayment.rate", self.repayment.rate),
            ("repayment.threshold", self.repayment.threshold),
            ("interest.rpi", self.interest.rpi),
            ("interest.variable_interest", self.interest.variable_interest),
            ("interest.lower_threshold", self.interest.lower_threshold),
            ("interest.upper_threshold", self.interest.upper_threshold),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(LoanError::InvalidTerms(format!(
                    "{} must be a non-negative number (got {})",
                    name, value
                )));
            }
        }

        if self.interest.upper_threshold <= self.interest.lower_threshold {
            return Err(LoanError::InvalidTerms(format!(
                "interest.upper_threshold ({}) must exceed interest.lower_threshold ({})",
                self.interest.upper_threshold, self.interest.lower_threshold
            )));
        }

        let factor = self.salary_growth_factor();
        if !factor.is_finite() || factor <= 0.0 {
            return Err(LoanError::InvalidTerms(format!(
                "salary growth factor must be positive (got {})",
                factor
            )));
        }

        if self.term_years == 0 {
            return Err(LoanError::InvalidTerms("term_years must be at least 1".to_string()));
        }

        Ok(())
    }
}
