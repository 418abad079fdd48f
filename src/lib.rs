//! Loan Projection - monthly amortization engine for income-contingent loans
//!
//! This library provides:
//! - Salary-linked repayment and salary-banded interest rate rules
//! - Daily interest accrual applied at month end
//! - A 30-year monthly projection with annual salary revisions
//! - Parallel what-if runs over alternative terms or salaries

pub mod error;
pub mod terms;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{LoanError, LoanResult};
pub use terms::{InterestTerms, LoanTerms, RepaymentTerms, SalaryGrowth};
pub use projection::{LoanSimulator, MonthlySnapshot, SimulationResult};
pub use scenario::{LoanPosition, ScenarioRunner};
