pub mod account_service;

pub use account_service::InterestAccountService;

use crate::errors::AccountError;

pub type ServiceResult<T> = Result<T, AccountError>;
