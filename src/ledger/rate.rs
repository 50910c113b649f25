use serde::{Deserialize, Serialize};

/// Length of one accrual cycle in whole calendar days.
pub const ACCRUAL_PERIOD_DAYS: i64 = 3;

/// Tolerance used by [`InterestRate::approx_eq`].
const RATE_EPSILON: f64 = 0.001;

/// Monthly income boundary (in pennies) between the middle and top rate tiers.
const HIGH_INCOME_PENNIES: u64 = 500_000;

/// Annual interest rate as a percentage, with the daily and per-cycle rates
/// derived from it.
///
/// Deliberately does not implement `PartialEq` or `Ord`: rate equality is the
/// tolerant [`approx_eq`](Self::approx_eq), which is not a total order and
/// must not be used for sorting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestRate(f64);

impl InterestRate {
    pub fn new(annual_rate: f64) -> Self {
        Self(annual_rate)
    }

    /// Classifies a rate from an optional monthly income in pennies.
    pub fn from_income(monthly_income_pennies: Option<u64>) -> Self {
        match monthly_income_pennies {
            None => Self(0.5),
            Some(pennies) if pennies < HIGH_INCOME_PENNIES => Self(0.93),
            Some(_) => Self(1.02),
        }
    }

    pub fn annual_rate(&self) -> f64 {
        self.0
    }

    pub fn daily_rate(&self) -> f64 {
        self.0 / 365.0
    }

    /// Rate for one full accrual cycle.
    pub fn period_rate(&self) -> f64 {
        self.daily_rate() * ACCRUAL_PERIOD_DAYS as f64
    }

    pub fn approx_eq(&self, other: &InterestRate) -> bool {
        (self.0 - other.0).abs() < RATE_EPSILON
    }
}
