#![doc(test(attr(deny(warnings))))]

//! Ledger Core offers the computation engine behind a personal finance
//! ledger: transaction entities, recurring-expense expansion, monthly
//! summaries, calendar grids, and the store that owns the collection.

pub mod advisor;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
