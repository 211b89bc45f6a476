#![doc(test(attr(deny(warnings))))]

//! Family Ledger classifies loosely tagged family transactions as income or
//! expense and folds them into per-day totals for the calendar and history
//! screens, alongside savings goals, history filters and theme preferences.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::core::{aggregate, classify, Classification, DailyAggregateCache};
pub use crate::domain::{DailyAggregate, DailyAggregates, TransactionRecord};
pub use crate::errors::{LedgerError, LedgerResult};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Family Ledger tracing initialized.");
    });
}
