pub mod account;
pub mod rate;
pub mod transaction;
pub mod user_id;

pub use account::InterestAccount;
pub use rate::{InterestRate, ACCRUAL_PERIOD_DAYS};
pub use transaction::{Transaction, TransactionKind};
pub use user_id::UserId;
