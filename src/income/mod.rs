use std::collections::HashMap;

use crate::errors::IncomeError;
use crate::ledger::UserId;

/// Looks up a user's monthly income at account-opening time.
///
/// Real deployments back this with the stats HTTP API; the trait keeps the
/// core independent of any transport. Lookup failures are not retried here.
pub trait IncomeProvider: Send + Sync {
    /// Monthly income in pennies, or `None` when unknown.
    fn user_income(&self, user_id: &UserId) -> Result<Option<u64>, IncomeError>;
}

/// Map-backed provider for tests and local runs.
#[derive(Debug, Default)]
pub struct StaticIncomeProvider {
    incomes: HashMap<UserId, u64>,
}

impl StaticIncomeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_income(mut self, user_id: UserId, monthly_income_pennies: u64) -> Self {
        self.incomes.insert(user_id, monthly_income_pennies);
        self
    }
}

impl IncomeProvider for StaticIncomeProvider {
    fn user_income(&self, user_id: &UserId) -> Result<Option<u64>, IncomeError> {
        Ok(self.incomes.get(user_id).copied())
    }
}
