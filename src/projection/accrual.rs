//! Monthly interest accrual
//!
//! Interest accrues daily on the balance held at the start of the month and
//! is added to the balance once, at month end.

use chrono::{Datelike, Months, NaiveDate};

/// Days used to convert an annual rate into a daily rate
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Number of calendar days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        // Only reachable in December of chrono's maximum year
        None => 31,
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Interest accrued over the month containing `month_date`
///
/// Each day earns `annual_rate / 365` on the opening balance; there is no
/// compounding within the month.
pub fn monthly_interest(balance: f64, annual_rate: f64, month_date: NaiveDate) -> f64 {
    let daily_rate = annual_rate / DAYS_PER_YEAR;
    let n_days = days_in_month(month_date) as f64;
    balance * daily_rate * n_days
}
