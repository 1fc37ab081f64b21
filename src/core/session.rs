use tracing::{info, warn};

use crate::{
    core::services::{LedgerSummary, SummaryService},
    errors::LedgerError,
    ledger::{Ledger, Transaction, TransactionId, TransactionKind},
    storage::{load_ledger, save_ledger, StorageBackend},
};

/// Single owner of the ledger that writes the full state back after every mutation.
///
/// When a write fails the mutation is undone, so the in-memory ledger always
/// matches what was last persisted.
pub struct LedgerSession {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl LedgerSession {
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let ledger = load_ledger(storage.as_ref());
        info!(transactions = ledger.len(), "ledger session opened");
        Self { ledger, storage }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn summary(&self) -> LedgerSummary {
        SummaryService::snapshot(&self.ledger)
    }

    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        category: &str,
        kind: TransactionKind,
    ) -> Result<Transaction, LedgerError> {
        self.mutate(|ledger| Ok(ledger.add(description, amount, category, kind)?))
    }

    /// Removes `id` if present. Nothing is written when the id is unknown.
    pub fn remove(&mut self, id: TransactionId) -> Result<Option<Transaction>, LedgerError> {
        if self.ledger.get(id).is_none() {
            return Ok(None);
        }
        self.mutate(|ledger| Ok(ledger.remove(id)))
    }

    pub fn set_budget(&mut self, limit: f64) -> Result<(), LedgerError> {
        self.mutate(|ledger| Ok(ledger.set_budget(limit)?))
    }

    fn mutate<T>(
        &mut self,
        change: impl FnOnce(&mut Ledger) -> Result<T, LedgerError>,
    ) -> Result<T, LedgerError> {
        let previous = self.ledger.clone();
        let outcome = change(&mut self.ledger)?;
        if let Err(err) = self.flush() {
            self.ledger = previous;
            return Err(err);
        }
        Ok(outcome)
    }

    fn flush(&self) -> Result<(), LedgerError> {
        save_ledger(self.storage.as_ref(), &self.ledger).map_err(|err| {
            warn!(error = %err, "failed to persist ledger, rolling back");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, BUDGET_KEY, TRANSACTIONS_KEY};
    use std::sync::Arc;

    struct Shared(Arc<MemoryStorage>);

    impl StorageBackend for Shared {
        fn read(&self, key: &str) -> crate::storage::Result<Option<String>> {
            self.0.read(key)
        }

        fn write(&self, key: &str, value: &str) -> crate::storage::Result<()> {
            self.0.write(key, value)
        }
    }

    #[test]
    fn mutations_are_flushed() {
        let backing = Arc::new(MemoryStorage::new());
        let mut session = LedgerSession::open(Box::new(Shared(backing.clone())));
        let txn = session
            .add("Lunch", 9.5, "Food", TransactionKind::Expense)
            .unwrap();
        assert!(backing.get(TRANSACTIONS_KEY).unwrap().contains("Lunch"));

        session.set_budget(100.0).unwrap();
        assert_eq!(backing.get(BUDGET_KEY).as_deref(), Some("100"));

        session.remove(txn.id).unwrap();
        assert_eq!(backing.get(TRANSACTIONS_KEY).as_deref(), Some("[]"));

        let reopened = LedgerSession::open(Box::new(Shared(backing)));
        assert!(reopened.ledger().is_empty());
        assert_eq!(reopened.ledger().budget().limit(), 100.0);
    }

    #[test]
    fn failed_flush_rolls_back_every_mutation() {
        let storage = MemoryStorage::read_only().with_value(
            TRANSACTIONS_KEY,
            r#"[{"id":4,"description":"Pay","amount":50,"category":"Salary","type":"income"}]"#,
        );
        let mut session = LedgerSession::open(Box::new(storage));
        let before = session.ledger().clone();

        let err = session
            .add("Lunch", 9.5, "Food", TransactionKind::Expense)
            .expect_err("write must fail");
        assert!(matches!(err, LedgerError::Io(_)));
        assert_eq!(session.ledger(), &before);

        assert!(session.remove(4).is_err());
        assert_eq!(session.ledger(), &before);

        assert!(session.set_budget(10.0).is_err());
        assert_eq!(session.ledger(), &before);
    }

    #[test]
    fn validation_errors_skip_persistence() {
        let mut session = LedgerSession::open(Box::new(MemoryStorage::read_only()));
        let err = session
            .add("", 9.5, "Food", TransactionKind::Expense)
            .expect_err("empty description");
        assert!(err.is_validation());
        assert!(session.remove(42).unwrap().is_none());
    }
}
