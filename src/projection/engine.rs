//! Core projection engine for monthly loan balance projections

use chrono::{Months, NaiveDate};
use log::{debug, info};

use crate::error::{ensure_finite, LoanError, LoanResult};
use crate::terms::LoanTerms;
use super::accrual::{first_of_month, monthly_interest};
use super::schedule::{MonthlySnapshot, SimulationResult};
use super::state::LoanState;

/// Date format accepted from callers (e.g. 01/09/2020)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` start date
pub fn parse_start_date(input: &str) -> LoanResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| LoanError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

fn add_months(date: NaiveDate, months: u32) -> LoanResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| LoanError::InvalidDate {
            input: date.to_string(),
            reason: format!("adding {} months leaves the supported calendar", months),
        })
}

/// Main simulation engine
#[derive(Debug, Clone, Default)]
pub struct LoanSimulator {
    terms: LoanTerms,
}

impl LoanSimulator {
    /// Create a simulator with the given terms
    pub fn new(terms: LoanTerms) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Run the projection from a `DD/MM/YYYY` start date
    pub fn simulate_from_str(
        &self,
        starting_balance: f64,
        start_date: &str,
        starting_salary: f64,
    ) -> LoanResult<SimulationResult> {
        let start_date = parse_start_date(start_date)?;
        self.simulate(starting_balance, start_date, starting_salary)
    }

    /// Run the projection until the horizon or until the loan is repaid
    ///
    /// All inputs are validated before the first month is simulated; an
    /// invalid input never produces a partial schedule.
    pub fn simulate(
        &self,
        starting_balance: f64,
        start_date: NaiveDate,
        starting_salary: f64,
    ) -> LoanResult<SimulationResult> {
        self.terms.validate()?;
        let starting_balance = ensure_finite("starting_balance", starting_balance)?;
        if starting_balance < 0.0 {
            return Err(LoanError::NegativeBalance(starting_balance));
        }

        let start_month = first_of_month(start_date);
        let end_date = add_months(start_month, self.terms.term_months())?;
        let mut state = LoanState::initial(&self.terms, starting_balance, start_month, starting_salary)?;

        debug!(
            "Simulating balance {:.2} from {} to {}: salary {:.2}, rate {:.4}, repayment {:.2}",
            starting_balance, start_month, end_date, state.current_salary, state.current_rate,
            state.current_repayment
        );

        let mut result = SimulationResult::new(start_month, end_date, starting_balance, starting_salary);

        while state.current_date < end_date && !state.is_repaid() {
            let (next, snapshot) = self.step(&state)?;
            result.add_snapshot(snapshot);
            state = next;
        }

        if state.is_repaid() && !result.is_empty() {
            result.repaid_on = Some(state.current_date);
            info!("Loan repaid on {} after {} months", state.current_date, state.months_elapsed);
        } else if !result.is_empty() {
            info!("Balance of {:.2} written off on {}", state.balance, end_date);
        }

        Ok(result)
    }

    /// Simulate a single month
    ///
    /// Pure transition: returns the state for the following month together
    /// with the snapshot recorded for this one.
    pub fn step(&self, state: &LoanState) -> LoanResult<(LoanState, MonthlySnapshot)> {
        let mut next = *state;

        // Salary, rate and repayment are only revised at the start of a year
        if next.is_new_year() {
            let salary = self
                .terms
                .salary_growth
                .revise(next.current_salary, self.terms.interest.rpi);
            next = next.with_salary(&self.terms, salary)?;
            debug!(
                "{}: salary revised to {:.2}, rate {:.4}, repayment {:.2}",
                next.current_date, next.current_salary, next.current_rate, next.current_repayment
            );
        }

        let interest = monthly_interest(next.balance, next.current_rate, next.current_date);

        // Never collect more than is owed
        let payment = next.current_repayment.min(next.balance + interest);

        next.balance = next.balance + interest - payment;
        next.current_date = add_months(next.current_date, 1)?;
        next.months_elapsed += 1;

        let snapshot = MonthlySnapshot {
            date: next.current_date,
            balance: next.balance,
            interest_accrued: interest,
            payment,
        };

        Ok((next, snapshot))
    }
}
