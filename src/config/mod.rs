use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::AccountError;

fn default_minimum_payout() -> u64 {
    1
}

/// Tunables for the accrual engine. The accrual cycle length itself is fixed
/// (see [`crate::ledger::ACCRUAL_PERIOD_DAYS`]) and is not configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Smallest accumulated interest, in pennies, that triggers a payout.
    #[serde(default = "default_minimum_payout")]
    pub minimum_payout_pennies: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimum_payout_pennies: default_minimum_payout(),
        }
    }
}

impl EngineConfig {
    /// Loads a config file, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self, AccountError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), AccountError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
