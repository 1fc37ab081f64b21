use std::collections::HashSet;

use tracing::debug;

use super::{
    budget::Budget,
    filter::TransactionFilter,
    totals::{CategoryTotal, CategoryTotals},
    transaction::{Transaction, TransactionId, TransactionKind},
};
use crate::errors::ValidationError;

const FIRST_ID: TransactionId = 1;

/// In-memory transaction collection plus the budget threshold.
///
/// Mutations validate their input and leave the ledger untouched on failure.
/// Every query is a pure function of the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    budget: Budget,
    next_id: TransactionId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            budget: Budget::UNSET,
            next_id: FIRST_ID,
        }
    }

    /// Rebuilds a ledger from previously saved records, keeping their order.
    pub fn from_parts(transactions: Vec<Transaction>, budget: Budget) -> Self {
        let next_id = transactions
            .iter()
            .map(|txn| txn.id)
            .max()
            .map_or(FIRST_ID, |max| max.checked_add(1).unwrap_or(FIRST_ID));
        Self {
            transactions,
            budget,
            next_id,
        }
    }

    /// Validates and appends a new transaction, returning the stored record.
    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        category: &str,
        kind: TransactionKind,
    ) -> Result<Transaction, ValidationError> {
        let id = self.allocate_id()?;
        let transaction = Transaction::new(id, description, amount, category, kind)?;
        self.next_id = id.checked_add(1).unwrap_or(FIRST_ID);
        debug!(id = transaction.id, kind = %kind, amount, "transaction added");
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Removes the transaction with `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.position(id)?;
        debug!(id, "transaction removed");
        Some(self.transactions.remove(index))
    }

    /// Next id not held by any stored transaction. After the counter wraps,
    /// the lowest free id is used instead.
    fn allocate_id(&self) -> Result<TransactionId, ValidationError> {
        if self.get(self.next_id).is_none() {
            return Ok(self.next_id);
        }
        let used: HashSet<TransactionId> = self.transactions.iter().map(|txn| txn.id).collect();
        (FIRST_ID..=TransactionId::MAX)
            .find(|id| !used.contains(id))
            .ok_or(ValidationError::IdsExhausted)
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|txn| txn.id == id)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn set_budget(&mut self, limit: f64) -> Result<(), ValidationError> {
        self.budget = Budget::new(limit)?;
        debug!(limit, "budget updated");
        Ok(())
    }

    /// Transactions matching `filter`, in insertion order.
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect()
    }

    /// Distinct categories across all transactions, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for txn in &self.transactions {
            if !seen.contains(&txn.category.as_str()) {
                seen.push(&txn.category);
            }
        }
        seen
    }

    pub fn total_by_kind(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn total_income(&self) -> f64 {
        self.total_by_kind(TransactionKind::Income)
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_by_kind(TransactionKind::Expense)
    }

    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    /// Expense sums grouped by category, in first-seen order.
    pub fn category_totals(&self) -> CategoryTotals {
        let mut totals = CategoryTotals::new();
        for txn in self.transactions.iter().filter(|txn| txn.is_expense()) {
            totals.accumulate(&txn.category, txn.amount);
        }
        totals
    }

    /// Expense category with the largest sum. Ties go to the category seen first.
    pub fn top_expense_category(&self) -> Option<CategoryTotal> {
        self.category_totals().max().cloned()
    }

    /// Expenses as a percentage of income, capped at 100. Zero when there is no income.
    pub fn spend_percent(&self) -> f64 {
        let income = self.total_income();
        if income <= 0.0 {
            return 0.0;
        }
        let percent = self.total_expenses() / income * 100.0;
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.budget.is_exceeded_by(self.total_expenses())
    }
}
