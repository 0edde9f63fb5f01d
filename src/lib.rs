#![doc(test(attr(deny(warnings))))]

//! Finance Core is a personal finance ledger: it records income and expense
//! transactions, persists them as JSON, and derives balance, per-category
//! expense, and per-month summaries.

pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
