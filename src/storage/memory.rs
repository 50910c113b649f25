use std::collections::HashMap;

use crate::ledger::{InterestAccount, Transaction, UserId};

use super::{AccountRepository, Result, TransactionRepository};

/// In-memory account store keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: HashMap<UserId, InterestAccount>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn save(&mut self, account: InterestAccount) -> Result<()> {
        self.accounts.insert(account.user_id(), account);
        Ok(())
    }

    fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<InterestAccount>> {
        Ok(self.accounts.get(user_id).cloned())
    }

    fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool> {
        Ok(self.accounts.contains_key(user_id))
    }

    fn find_all(&self) -> Result<Vec<InterestAccount>> {
        Ok(self.accounts.values().cloned().collect())
    }
}

/// In-memory transaction log. Preserves insertion order, which statement
/// sorting relies on for deterministic timestamp tie-breaks.
#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn save(&mut self, transaction: Transaction) -> Result<()> {
        self.transactions.push(transaction);
        Ok(())
    }

    fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|txn| txn.user_id == *user_id)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }
}
