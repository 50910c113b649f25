#![doc(test(attr(deny(warnings))))]

//! Interest Core implements interest-bearing accounts: income-tiered rates at
//! opening, deposits, 3-day accrual cycles, and deferral of sub-penny interest
//! until it crosses the payout threshold.

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod income;
pub mod ledger;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Interest Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
