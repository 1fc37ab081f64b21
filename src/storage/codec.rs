//! Encoding of ledger state to and from its two persisted keys.
//!
//! Loading never fails: anything unreadable falls back to an empty collection
//! or an unset budget and is reported through `tracing`.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    errors::DecodeError,
    ledger::{Budget, Ledger, Transaction},
};

use super::{Result, StorageBackend, BUDGET_KEY, TRANSACTIONS_KEY};

pub fn encode_transactions(transactions: &[Transaction]) -> Result<String> {
    Ok(serde_json::to_string(transactions)?)
}

pub fn encode_budget(budget: Budget) -> String {
    budget.limit().to_string()
}

/// Parses the `transactions` payload record by record, dropping records that
/// fail to decode, break the transaction invariants, or repeat an earlier id.
/// Only a payload that is not a JSON array is an error.
pub fn decode_transactions(raw: &str) -> std::result::Result<Vec<Transaction>, DecodeError> {
    let records: Vec<Value> = serde_json::from_str(raw).map_err(|source| DecodeError::Json {
        key: TRANSACTIONS_KEY,
        source,
    })?;
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(records.len());
    for (index, value) in records.into_iter().enumerate() {
        let record: Transaction = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                warn!(index, error = %err, "dropping undecodable saved transaction");
                continue;
            }
        };
        if let Err(err) = record.validate() {
            warn!(id = record.id, error = %err, "dropping invalid saved transaction");
            continue;
        }
        if !seen.insert(record.id) {
            warn!(id = record.id, "dropping saved transaction with duplicate id");
            continue;
        }
        kept.push(record);
    }
    Ok(kept)
}

pub fn decode_budget(raw: &str) -> std::result::Result<Budget, DecodeError> {
    raw.parse().map_err(|_| DecodeError::Value {
        key: BUDGET_KEY,
        raw: raw.trim().to_string(),
    })
}

/// Reads both keys and rebuilds the ledger, starting empty where data is missing or bad.
pub fn load_ledger(storage: &dyn StorageBackend) -> Ledger {
    let transactions = match read_key(storage, TRANSACTIONS_KEY) {
        Some(raw) => decode_transactions(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "saved transactions unreadable, starting empty");
            Vec::new()
        }),
        None => Vec::new(),
    };
    let budget = match read_key(storage, BUDGET_KEY) {
        Some(raw) => decode_budget(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "saved budget unreadable, treating as unset");
            Budget::UNSET
        }),
        None => Budget::UNSET,
    };
    debug!(
        transactions = transactions.len(),
        budget = budget.limit(),
        "ledger loaded"
    );
    Ledger::from_parts(transactions, budget)
}

/// Writes the full ledger state back under both keys.
pub fn save_ledger(storage: &dyn StorageBackend, ledger: &Ledger) -> Result<()> {
    storage.write(TRANSACTIONS_KEY, &encode_transactions(ledger.transactions())?)?;
    storage.write(BUDGET_KEY, &encode_budget(ledger.budget()))?;
    debug!(transactions = ledger.len(), "ledger saved");
    Ok(())
}

fn read_key(storage: &dyn StorageBackend, key: &str) -> Option<String> {
    match storage.read(key) {
        Ok(value) => value.filter(|raw| !raw.trim().is_empty()),
        Err(err) => {
            warn!(key, error = %err, "could not read saved state");
            None
        }
    }
}
