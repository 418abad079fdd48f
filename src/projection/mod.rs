//! Projection engine for monthly loan amortization

mod accrual;
mod state;
mod engine;
mod schedule;

pub use accrual::{days_in_month, first_of_month, monthly_interest, DAYS_PER_YEAR};
pub use state::LoanState;
pub use engine::{parse_start_date, LoanSimulator, DATE_FORMAT};
pub use schedule::{MonthlySnapshot, ScheduleSeries, SimulationResult, SimulationSummary};
