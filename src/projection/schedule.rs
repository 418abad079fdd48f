//! Amortization schedule output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of one simulated month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Month end marker (first day of the following month)
    pub date: NaiveDate,
    /// Balance after interest and payment
    pub balance: f64,
    /// Interest accrued during the month
    pub interest_accrued: f64,
    /// Repayment taken during the month
    pub payment: f64,
}

/// Complete simulation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Normalized start month
    pub start_date: NaiveDate,

    /// Horizon at which any remaining balance is written off
    pub end_date: NaiveDate,

    pub starting_balance: f64,
    pub starting_salary: f64,

    /// Monthly snapshots in chronological order
    pub snapshots: Vec<MonthlySnapshot>,

    /// Month end at which the balance reached zero, if it did
    pub repaid_on: Option<NaiveDate>,
}

impl SimulationResult {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        starting_balance: f64,
        starting_salary: f64,
    ) -> Self {
        Self {
            start_date,
            end_date,
            starting_balance,
            starting_salary,
            snapshots: Vec::new(),
            repaid_on: None,
        }
    }

    /// Add a snapshot
    pub fn add_snapshot(&mut self, snapshot: MonthlySnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Balance after the last simulated month
    pub fn final_balance(&self) -> f64 {
        self.snapshots
            .last()
            .map(|s| s.balance)
            .unwrap_or(self.starting_balance)
    }

    /// Split into parallel series for charting
    pub fn series(&self) -> ScheduleSeries {
        ScheduleSeries {
            dates: self.snapshots.iter().map(|s| s.date).collect(),
            balance: self.snapshots.iter().map(|s| s.balance).collect(),
            interest: self.snapshots.iter().map(|s| s.interest_accrued).collect(),
            payment: self.snapshots.iter().map(|s| s.payment).collect(),
        }
    }

    /// Get summary statistics
    pub fn summary(&self) -> SimulationSummary {
        let total_interest: f64 = self.snapshots.iter().map(|s| s.interest_accrued).sum();
        let total_paid: f64 = self.snapshots.iter().map(|s| s.payment).sum();
        let final_balance = self.final_balance();

        SimulationSummary {
            months_simulated: self.snapshots.len() as u32,
            total_interest,
            total_paid,
            final_balance,
            repaid_on: self.repaid_on,
            written_off: if self.repaid_on.is_some() { 0.0 } else { final_balance.max(0.0) },
        }
    }
}

/// Summary statistics for a simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub months_simulated: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    pub final_balance: f64,
    pub repaid_on: Option<NaiveDate>,
    /// Balance cancelled at the horizon
    pub written_off: f64,
}

/// Schedule as parallel columns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSeries {
    pub dates: Vec<NaiveDate>,
    pub balance: Vec<f64>,
    pub interest: Vec<f64>,
    pub payment: Vec<f64>,
}
