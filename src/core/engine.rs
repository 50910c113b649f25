use chrono::{DateTime, Utc};

use crate::config::EngineConfig;
use crate::currency::Money;
use crate::errors::AccountError;
use crate::ledger::{InterestAccount, Transaction};
use crate::storage::TransactionRepository;

/// Result of evaluating one account on one date.
#[derive(Debug, Clone)]
pub enum AccrualOutcome {
    /// A full cycle has not elapsed yet; nothing changed.
    NotDue,
    /// Interest stayed below the payout threshold and was carried forward.
    Accumulated,
    /// Accumulated plus period interest was credited to the balance.
    Paid(Transaction),
}

impl AccrualOutcome {
    /// Whether the evaluation mutated the account.
    pub fn changed_account(&self) -> bool {
        !matches!(self, AccrualOutcome::NotDue)
    }

    pub fn into_transaction(self) -> Option<Transaction> {
        match self {
            AccrualOutcome::Paid(txn) => Some(txn),
            _ => None,
        }
    }
}

/// Decides per account and evaluation date whether interest is due, computes
/// it, and applies the threshold/payout policy.
///
/// Every due evaluation advances the account's accrual clock, whether or not
/// anything was paid out, so a cycle can never be consumed twice. The engine
/// only touches storage to persist the transaction it produced; saving the
/// mutated account is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct AccrualEngine {
    config: EngineConfig,
}

impl AccrualEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Evaluates one account at `at`. Never partially applies: the call is a
    /// no-op, a silent accumulation, or a payout.
    pub fn evaluate(
        &self,
        account: &mut InterestAccount,
        at: DateTime<Utc>,
        transactions: &mut dyn TransactionRepository,
    ) -> Result<AccrualOutcome, AccountError> {
        if !account.is_accrual_due(at) {
            return Ok(AccrualOutcome::NotDue);
        }

        let period_interest = self.period_interest(account)?;
        let candidate = account.accumulated_interest().add(period_interest)?;

        if candidate.pennies() >= self.config.minimum_payout_pennies {
            account.payout_accumulated_interest()?;
            account.add_interest(period_interest)?;
            account.mark_accrued(at);

            let transaction = Transaction::interest(account.user_id(), candidate, at);
            transactions.save(transaction.clone())?;
            tracing::info!(
                user_id = %account.user_id(),
                amount = %candidate,
                "interest paid out"
            );
            Ok(AccrualOutcome::Paid(transaction))
        } else {
            account.accumulate_interest(period_interest)?;
            account.mark_accrued(at);
            tracing::debug!(
                user_id = %account.user_id(),
                accumulated = %account.accumulated_interest(),
                "interest below payout threshold, carried forward"
            );
            Ok(AccrualOutcome::Accumulated)
        }
    }

    /// Interest earned over one cycle. The stored rate is a percentage, so it
    /// is divided by 100 before multiplying.
    fn period_interest(&self, account: &InterestAccount) -> Result<Money, AccountError> {
        let period_rate = account.interest_rate().period_rate() / 100.0;
        account.balance().multiply(period_rate)
    }
}
