pub mod memory;

use crate::errors::AccountError;
use crate::ledger::{InterestAccount, Transaction, UserId};

pub type Result<T> = std::result::Result<T, AccountError>;

/// Abstraction over stores capable of persisting accounts, keyed by user id.
pub trait AccountRepository: Send + Sync {
    fn save(&mut self, account: InterestAccount) -> Result<()>;
    fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<InterestAccount>>;
    fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool>;
    /// Every stored account, in unspecified order.
    fn find_all(&self) -> Result<Vec<InterestAccount>>;
}

/// Append-only store of transaction records.
pub trait TransactionRepository: Send + Sync {
    fn save(&mut self, transaction: Transaction) -> Result<()>;
    /// All transactions for one user, in insertion order.
    fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Transaction>>;
    fn find_all(&self) -> Result<Vec<Transaction>>;
}

pub use memory::{InMemoryAccountRepository, InMemoryTransactionRepository};
