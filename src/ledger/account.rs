use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::Money;
use crate::errors::AccountError;

use super::rate::{InterestRate, ACCRUAL_PERIOD_DAYS};
use super::user_id::UserId;

/// An interest-bearing account for a single user.
///
/// Fields are private: the balance and accrual bookkeeping only move through
/// the methods below, so they can never go negative or skip a cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestAccount {
    user_id: UserId,
    balance: Money,
    interest_rate: InterestRate,
    created_at: DateTime<Utc>,
    last_accrual_at: DateTime<Utc>,
    accumulated_interest: Money,
}

impl InterestAccount {
    /// Opens an account with a zero balance. The accrual clock starts at the
    /// creation timestamp.
    pub fn new(user_id: UserId, interest_rate: InterestRate, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            balance: Money::zero(),
            interest_rate,
            created_at,
            last_accrual_at: created_at,
            accumulated_interest: Money::zero(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn interest_rate(&self) -> InterestRate {
        self.interest_rate
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_accrual_at(&self) -> DateTime<Utc> {
        self.last_accrual_at
    }

    pub fn accumulated_interest(&self) -> Money {
        self.accumulated_interest
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        self.balance = self.balance.add(amount)?;
        Ok(())
    }

    /// Credits paid-out interest to the balance.
    pub fn add_interest(&mut self, interest: Money) -> Result<(), AccountError> {
        self.balance = self.balance.add(interest)?;
        Ok(())
    }

    /// Carries sub-threshold interest forward instead of dropping it.
    pub fn accumulate_interest(&mut self, interest: Money) -> Result<(), AccountError> {
        self.accumulated_interest = self.accumulated_interest.add(interest)?;
        Ok(())
    }

    /// Moves the accumulated interest into the balance and returns the amount
    /// paid out.
    pub fn payout_accumulated_interest(&mut self) -> Result<Money, AccountError> {
        let payout = self.accumulated_interest;
        self.balance = self.balance.add(payout)?;
        self.accumulated_interest = Money::zero();
        Ok(payout)
    }

    pub fn mark_accrued(&mut self, at: DateTime<Utc>) {
        self.last_accrual_at = at;
    }

    /// Whether a full accrual cycle has elapsed at `at`, counted in whole
    /// calendar days since the last accrual.
    pub fn is_accrual_due(&self, at: DateTime<Utc>) -> bool {
        let days = (at.date_naive() - self.last_accrual_at.date_naive()).num_days();
        days.abs() >= ACCRUAL_PERIOD_DAYS
    }
}
