//! Loan state tracked across the monthly projection

use chrono::{Datelike, NaiveDate};

use crate::error::LoanResult;
use crate::terms::LoanTerms;

/// State of the loan at the start of a simulated month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanState {
    /// Outstanding balance
    pub balance: f64,

    /// Month being simulated (always the 1st of the month)
    pub current_date: NaiveDate,

    /// Annual salary in force for the current year
    pub current_salary: f64,

    /// Annual interest rate derived from `current_salary`
    pub current_rate: f64,

    /// Monthly repayment derived from `current_salary`
    pub current_repayment: f64,

    /// Months simulated so far
    pub months_elapsed: u32,
}

impl LoanState {
    /// Initialize state at projection start
    pub fn initial(
        terms: &LoanTerms,
        balance: f64,
        start_month: NaiveDate,
        salary: f64,
    ) -> LoanResult<Self> {
        Ok(Self {
            balance,
            current_date: start_month,
            current_salary: salary,
            current_rate: terms.interest.salary_to_interest_rate(salary)?,
            current_repayment: terms.repayment.monthly_repayment(salary)?,
            months_elapsed: 0,
        })
    }

    /// True when the month about to be simulated opens a new calendar year
    pub fn is_new_year(&self) -> bool {
        self.months_elapsed > 0 && self.current_date.month() == 1
    }

    /// Loan fully repaid
    pub fn is_repaid(&self) -> bool {
        self.balance <= 0.0
    }

    /// State with salary revised for a new year, rate and repayment rederived
    pub fn with_salary(&self, terms: &LoanTerms, salary: f64) -> LoanResult<Self> {
        Ok(Self {
            current_salary: salary,
            current_rate: terms.interest.salary_to_interest_rate(salary)?,
            current_repayment: terms.repayment.monthly_repayment(salary)?,
            ..*self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_initial_derives_rate_and_repayment() {
        let terms = LoanTerms::default();
        let state = LoanState::initial(&terms, 40_000.0, date(2020, 9), 35_000.0).unwrap();
        assert_relative_eq!(state.current_rate, 0.045, epsilon = 1e-12);
        assert_relative_eq!(state.current_repayment, 75.0, epsilon = 1e-9);
        assert_eq!(state.months_elapsed, 0);
    }

    #[test]
    fn test_initial_rejects_negative_salary() {
        let terms = LoanTerms::default();
        assert!(LoanState::initial(&terms, 1_000.0, date(2020, 1), -1.0).is_err());
    }

    #[test]
    fn test_first_january_is_not_a_revision() {
        let terms = LoanTerms::default();
        let mut state = LoanState::initial(&terms, 1_000.0, date(2020, 1), 20_000.0).unwrap();
        assert!(!state.is_new_year());

        state.months_elapsed = 12;
        assert!(state.is_new_year());

        state.current_date = date(2021, 2);
        assert!(!state.is_new_year());
    }

    #[test]
    fn test_with_salary_keeps_balance() {
        let terms = LoanTerms::default();
        let state = LoanState::initial(&terms, 12_000.0, date(2020, 1), 20_000.0).unwrap();
        let revised = state.with_salary(&terms, 45_000.0).unwrap();
        assert_eq!(revised.balance, 12_000.0);
        assert_eq!(revised.current_date, state.current_date);
        assert_relative_eq!(revised.current_rate, 0.06, epsilon = 1e-12);
        assert_relative_eq!(revised.current_repayment, 150.0, epsilon = 1e-9);
    }
}
