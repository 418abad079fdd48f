//! Annual salary revision

use serde::{Deserialize, Serialize};

/// How salary is revised at each January
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SalaryGrowth {
    /// Grow by RPI plus a fixed margin
    RpiLinked { margin: f64 },
    /// Grow by a flat annual rate
    Fixed { rate: f64 },
    /// Salary stays at its starting value
    Frozen,
}

impl Default for SalaryGrowth {
    fn default() -> Self {
        SalaryGrowth::RpiLinked { margin: 0.02 }
    }
}

impl SalaryGrowth {
    /// Multiplier applied to salary once per year
    pub fn annual_factor(&self, rpi: f64) -> f64 {
        match self {
            SalaryGrowth::RpiLinked { margin } => 1.0 + rpi + margin,
            SalaryGrowth::Fixed { rate } => 1.0 + rate,
            SalaryGrowth::Frozen => 1.0,
        }
    }

    /// Salary for the following year
    pub fn revise(&self, salary: f64, rpi: f64) -> f64 {
        salary * self.annual_factor(rpi)
    }

    /// Annual growth rate implied by this model
    pub fn annual_rate(&self, rpi: f64) -> f64 {
        self.annual_factor(rpi) - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_rpi_plus_two() {
        let growth = SalaryGrowth::default();
        assert_relative_eq!(growth.annual_factor(0.03), 1.05, epsilon = 1e-9);
        assert_relative_eq!(growth.revise(20_000.0, 0.03), 21_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_ignores_rpi() {
        let growth = SalaryGrowth::Fixed { rate: 0.05 };
        assert_relative_eq!(growth.annual_factor(0.10), 1.05, epsilon = 1e-9);
    }

    #[test]
    fn test_none_holds_salary() {
        assert_relative_eq!(SalaryGrowth::Frozen.revise(30_000.0, 0.03), 30_000.0, epsilon = 1e-9);
        assert_relative_eq!(SalaryGrowth::Frozen.annual_rate(0.03), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_serde_tagged() {
        let growth: SalaryGrowth = serde_json::from_str(r#"{"type":"fixed","rate":0.05}"#).unwrap();
        assert_eq!(growth, SalaryGrowth::Fixed { rate: 0.05 });
        let frozen: SalaryGrowth = serde_json::from_str(r#"{"type":"frozen"}"#).unwrap();
        assert_eq!(frozen, SalaryGrowth::Frozen);
    }
}
