use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Money;

use super::user_id::UserId;

/// Immutable record of a deposit or an interest payout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: UserId,
    pub amount: Money,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
    pub description: String,
}

impl Transaction {
    pub fn deposit(user_id: UserId, amount: Money, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            kind: TransactionKind::Deposit,
            created_at,
            description: "Deposit".into(),
        }
    }

    pub fn interest(user_id: UserId, amount: Money, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            kind: TransactionKind::Interest,
            created_at,
            description: "Interest payment".into(),
        }
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == TransactionKind::Deposit
    }

    pub fn is_interest(&self) -> bool {
        self.kind == TransactionKind::Interest
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Interest,
}
