use thiserror::Error;

use crate::ledger::UserId;

/// Error type that captures the failures of account and accrual operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
    #[error("User {0} already has an open interest account")]
    AccountAlreadyExists(UserId),
    #[error("No interest account found for user {0}")]
    AccountNotFound(UserId),
    #[error("Income lookup failed: {0}")]
    IncomeLookup(#[from] IncomeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failure reported by an income provider. Keeps the underlying transport or
/// parsing cause available for diagnostics.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct IncomeError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl IncomeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
