//! Persistence of ledger state under the `transactions` and `monthlyBudget` keys.

pub mod codec;
pub mod json_backend;
pub mod memory;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const BUDGET_KEY: &str = "monthlyBudget";

/// Text key/value store holding serialized ledger state.
pub trait StorageBackend: Send + Sync {
    /// Returns the stored text for `key`, or `None` when nothing was saved yet.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

pub use codec::{load_ledger, save_ledger};
pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
