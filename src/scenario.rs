//! Scenario runner for what-if projections of a single loan
//!
//! Each run gets its own simulator, so runs share nothing and are spread
//! across threads with rayon.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::error::LoanResult;
use crate::projection::{LoanSimulator, SimulationResult};
use crate::terms::LoanTerms;

/// Borrower position a scenario starts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanPosition {
    pub starting_balance: f64,
    pub start_date: NaiveDate,
    pub starting_salary: f64,
}

/// Runs one loan under alternative terms or salaries
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.run_salaries(&position, &[25_000.0, 35_000.0, 45_000.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_terms: LoanTerms,
}

impl ScenarioRunner {
    /// Create runner with default terms
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with pre-built terms
    pub fn with_terms(terms: LoanTerms) -> Self {
        Self { base_terms: terms }
    }

    /// Run a single projection under the base terms
    pub fn run(&self, position: &LoanPosition) -> LoanResult<SimulationResult> {
        LoanSimulator::new(self.base_terms.clone()).simulate(
            position.starting_balance,
            position.start_date,
            position.starting_salary,
        )
    }

    /// Run the same position under each set of terms
    pub fn run_scenarios(
        &self,
        position: &LoanPosition,
        terms: &[LoanTerms],
    ) -> Vec<LoanResult<SimulationResult>> {
        terms
            .par_iter()
            .map(|t| {
                LoanSimulator::new(t.clone()).simulate(
                    position.starting_balance,
                    position.start_date,
                    position.starting_salary,
                )
            })
            .collect()
    }

    /// Run the position with each alternative starting salary
    pub fn run_salaries(
        &self,
        position: &LoanPosition,
        salaries: &[f64],
    ) -> Vec<LoanResult<SimulationResult>> {
        let simulator = LoanSimulator::new(self.base_terms.clone());
        salaries
            .par_iter()
            .map(|&salary| {
                simulator.simulate(position.starting_balance, position.start_date, salary)
            })
            .collect()
    }

    /// Get reference to base terms
    pub fn terms(&self) -> &LoanTerms {
        &self.base_terms
    }

    /// Get mutable reference to base terms for customization
    pub fn terms_mut(&mut self) -> &mut LoanTerms {
        &mut self.base_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoanError;
    use crate::terms::SalaryGrowth;

    fn position() -> LoanPosition {
        LoanPosition {
            starting_balance: 40_000.0,
            start_date: NaiveDate::from_ymd_opt(2020, 9, 1).unwrap(),
            starting_salary: 30_000.0,
        }
    }

    #[test]
    fn test_scenarios_match_single_runs() {
        let runner = ScenarioRunner::new();
        let terms = vec![
            LoanTerms::with_salary_growth(SalaryGrowth::Frozen),
            LoanTerms::default(),
        ];

        let results = runner.run_scenarios(&position(), &terms);
        assert_eq!(results.len(), 2);

        let single = ScenarioRunner::with_terms(terms[1].clone()).run(&position()).unwrap();
        let parallel = results[1].as_ref().unwrap();
        assert_eq!(parallel.snapshots, single.snapshots);
    }

    #[test]
    fn test_higher_salary_repays_sooner() {
        let runner = ScenarioRunner::new();
        let results = runner.run_salaries(&position(), &[20_000.0, 30_000.0, 40_000.0]);

        let months: Vec<usize> = results.iter().map(|r| r.as_ref().unwrap().len()).collect();
        assert_eq!(months[0], 360);
        assert!(months[1] < months[0]);
        assert!(months[2] < months[1]);
        assert!(results[2].as_ref().unwrap().repaid_on.is_some());
    }

    #[test]
    fn test_invalid_salary_fails_its_own_run_only() {
        let runner = ScenarioRunner::new();
        let results = runner.run_salaries(&position(), &[-1.0, 30_000.0]);
        assert_eq!(results[0].as_ref().unwrap_err(), &LoanError::NegativeSalary(-1.0));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_terms_mut() {
        let mut runner = ScenarioRunner::new();
        runner.terms_mut().term_years = 10;
        assert_eq!(runner.run(&position()).unwrap().len(), 120);
    }
}
