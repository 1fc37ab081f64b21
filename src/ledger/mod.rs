//! Ledger domain models and the aggregation engine.

pub mod budget;
pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod totals;
pub mod transaction;

pub use budget::Budget;
pub use filter::{TransactionFilter, WILDCARD};
pub use ledger::Ledger;
pub use totals::{CategoryTotal, CategoryTotals};
pub use transaction::{Transaction, TransactionId, TransactionKind};
