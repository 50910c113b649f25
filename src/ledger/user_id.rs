use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant};

use crate::errors::AccountError;

/// Validated user identifier. Only RFC 4122 version-4 UUIDs are accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(value: &str) -> Result<Self, AccountError> {
        let uuid = Uuid::parse_str(value)
            .map_err(|_| AccountError::InvalidUserId(format!("invalid UUID format: {value}")))?;
        if uuid.get_variant() != Variant::RFC4122 || uuid.get_version_num() != 4 {
            return Err(AccountError::InvalidUserId(format!(
                "not a version-4 UUID: {value}"
            )));
        }
        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
