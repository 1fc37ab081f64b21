#![doc(test(attr(deny(warnings))))]

//! Spend Tracker records income and expenses and derives the figures a personal
//! finance dashboard shows: balance, totals, top spending category, per-category
//! breakdown, and progress against a budget.
//!
//! ```
//! use spend_tracker::ledger::{Ledger, TransactionKind};
//!
//! let mut ledger = Ledger::new();
//! ledger.add("Salary", 5000.0, "Salary", TransactionKind::Income).unwrap();
//! ledger.add("Groceries", 1200.0, "Food", TransactionKind::Expense).unwrap();
//! assert_eq!(ledger.balance(), 3800.0);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Spend Tracker tracing initialized.");
    });
}
