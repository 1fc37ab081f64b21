#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use spend_tracker::{
    core::LedgerSession,
    ledger::{Ledger, TransactionKind},
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders outlive the tests that use them.
/// Statics are never dropped, so the folders stay in the system temp dir.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a fresh data directory that stays valid for the rest of the test run.
pub fn temp_home() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a session backed by JSON files in an isolated directory.
pub fn setup_session() -> (LedgerSession, std::path::PathBuf) {
    let base = temp_home();
    let storage = JsonStorage::new(Some(base.clone())).expect("create json storage backend");
    (LedgerSession::open(Box::new(storage)), base)
}

pub fn income(ledger: &mut Ledger, category: &str, amount: f64) {
    ledger
        .add(category, amount, category, TransactionKind::Income)
        .expect("valid income");
}

pub fn expense(ledger: &mut Ledger, category: &str, amount: f64) {
    ledger
        .add(category, amount, category, TransactionKind::Expense)
        .expect("valid expense");
}
