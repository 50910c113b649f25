use chrono::{DateTime, Utc};

use crate::config::EngineConfig;
use crate::core::engine::AccrualEngine;
use crate::currency::Money;
use crate::errors::AccountError;
use crate::income::IncomeProvider;
use crate::ledger::{InterestAccount, InterestRate, Transaction, UserId};
use crate::storage::{
    AccountRepository, InMemoryAccountRepository, InMemoryTransactionRepository,
    TransactionRepository,
};
use crate::time::{Clock, SystemClock};

use super::ServiceResult;

/// Orchestrates the account lifecycle: open, deposit, statements, and the
/// per-account and batch accrual runs.
///
/// Every collaborator is injected; each operation reads the current account
/// state, mutates it, and writes it back as one unit.
pub struct InterestAccountService {
    accounts: Box<dyn AccountRepository>,
    transactions: Box<dyn TransactionRepository>,
    income: Box<dyn IncomeProvider>,
    clock: Box<dyn Clock>,
    engine: AccrualEngine,
}

impl InterestAccountService {
    pub fn new(
        accounts: Box<dyn AccountRepository>,
        transactions: Box<dyn TransactionRepository>,
        income: Box<dyn IncomeProvider>,
        clock: Box<dyn Clock>,
        config: EngineConfig,
    ) -> Self {
        Self {
            accounts,
            transactions,
            income,
            clock,
            engine: AccrualEngine::new(config),
        }
    }

    /// Convenience constructor wiring in-memory stores, the system clock, and
    /// default engine settings.
    pub fn in_memory(income: Box<dyn IncomeProvider>) -> Self {
        Self::new(
            Box::new(InMemoryAccountRepository::new()),
            Box::new(InMemoryTransactionRepository::new()),
            income,
            Box::new(SystemClock),
            EngineConfig::default(),
        )
    }

    /// Opens an account for `user_id` with a rate classified from the user's
    /// monthly income. One account per user.
    pub fn open_account(&mut self, user_id: UserId) -> ServiceResult<InterestAccount> {
        if self.accounts.exists_by_user_id(&user_id)? {
            return Err(AccountError::AccountAlreadyExists(user_id));
        }

        let income = self.income.user_income(&user_id)?;
        let rate = InterestRate::from_income(income);
        let account = InterestAccount::new(user_id, rate, self.clock.now());
        self.accounts.save(account.clone())?;

        tracing::info!(
            user_id = %user_id,
            annual_rate = rate.annual_rate(),
            "interest account opened"
        );
        Ok(account)
    }

    /// Adds `amount` to the account balance and records a deposit transaction.
    pub fn deposit(&mut self, user_id: &UserId, amount: Money) -> ServiceResult<Transaction> {
        let mut account = self.require_account(user_id)?;
        account.deposit(amount)?;
        self.accounts.save(account)?;

        let transaction = Transaction::deposit(*user_id, amount, self.clock.now());
        self.transactions.save(transaction.clone())?;
        tracing::debug!(user_id = %user_id, amount = %amount, "deposit recorded");
        Ok(transaction)
    }

    /// Runs one accrual evaluation for `user_id` as of now.
    pub fn calculate_interest(&mut self, user_id: &UserId) -> ServiceResult<Option<Transaction>> {
        let now = self.clock.now();
        self.calculate_interest_at(user_id, now)
    }

    /// Runs one accrual evaluation for `user_id` as of `at`. Returns the
    /// payout transaction when the threshold was crossed.
    pub fn calculate_interest_at(
        &mut self,
        user_id: &UserId,
        at: DateTime<Utc>,
    ) -> ServiceResult<Option<Transaction>> {
        let mut account = self.require_account(user_id)?;
        let outcome = self
            .engine
            .evaluate(&mut account, at, self.transactions.as_mut())?;
        if outcome.changed_account() {
            self.accounts.save(account)?;
        }
        Ok(outcome.into_transaction())
    }

    /// Evaluates every stored account as of now. Order across accounts follows
    /// repository enumeration and is unspecified.
    pub fn calculate_interest_for_all(&mut self) -> ServiceResult<Vec<Transaction>> {
        let now = self.clock.now();
        self.calculate_interest_for_all_at(now)
    }

    pub fn calculate_interest_for_all_at(
        &mut self,
        at: DateTime<Utc>,
    ) -> ServiceResult<Vec<Transaction>> {
        let mut payouts = Vec::new();
        for mut account in self.accounts.find_all()? {
            let outcome = self
                .engine
                .evaluate(&mut account, at, self.transactions.as_mut())?;
            if outcome.changed_account() {
                self.accounts.save(account)?;
            }
            if let Some(transaction) = outcome.into_transaction() {
                payouts.push(transaction);
            }
        }
        Ok(payouts)
    }

    pub fn account(&self, user_id: &UserId) -> ServiceResult<InterestAccount> {
        self.require_account(user_id)
    }

    /// All of the user's transactions, most recent first. The sort is stable,
    /// so timestamp ties keep the store's insertion order.
    pub fn statement(&self, user_id: &UserId) -> ServiceResult<Vec<Transaction>> {
        self.require_account(user_id)?;
        let mut transactions = self.transactions.find_by_user_id(user_id)?;
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(transactions)
    }

    fn require_account(&self, user_id: &UserId) -> ServiceResult<InterestAccount> {
        self.accounts
            .find_by_user_id(user_id)?
            .ok_or(AccountError::AccountNotFound(*user_id))
    }
}
