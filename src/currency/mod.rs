use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AccountError;

/// Monetary value in whole pennies. Never negative; every operation returns a
/// new value and fails rather than underflow.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a value from a signed penny amount, rejecting negatives.
    pub fn new(pennies: i64) -> Result<Self, AccountError> {
        if pennies < 0 {
            return Err(AccountError::InvalidAmount(format!(
                "amount cannot be negative: {pennies}"
            )));
        }
        Ok(Self(pennies as u64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Converts a pound amount, rounding half away from zero to the nearest
    /// penny.
    pub fn from_pounds(pounds: f64) -> Result<Self, AccountError> {
        let pennies = (pounds * 100.0).round();
        if pennies < 0.0 {
            return Err(AccountError::InvalidAmount(format!(
                "amount cannot be negative: {pounds}"
            )));
        }
        Ok(Self(pennies as u64))
    }

    pub fn pennies(&self) -> u64 {
        self.0
    }

    pub fn pounds(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn add(&self, other: Money) -> Result<Money, AccountError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| AccountError::InvalidAmount(format!("amount overflow: {self} + {other}")))
    }

    pub fn subtract(&self, other: Money) -> Result<Money, AccountError> {
        self.0.checked_sub(other.0).map(Money).ok_or_else(|| {
            AccountError::InvalidAmount(format!("insufficient funds: {self} - {other}"))
        })
    }

    /// Multiplies by a factor, rounding the product to the nearest penny.
    pub fn multiply(&self, factor: f64) -> Result<Money, AccountError> {
        let product = (self.0 as f64 * factor).round();
        if product < 0.0 {
            return Err(AccountError::InvalidAmount(format!(
                "amount cannot be negative: {self} * {factor}"
            )));
        }
        Ok(Self(product as u64))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn displays_as_pounds() {
        assert_eq!(Money::new(150013).unwrap().to_string(), "1500.13");
        assert_eq!(Money::new(7).unwrap().to_string(), "0.07");
    }
}
