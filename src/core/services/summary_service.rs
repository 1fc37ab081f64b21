use serde::Serialize;

use crate::ledger::{Budget, CategoryTotal, CategoryTotals, Ledger};

/// Everything the dashboard shows, computed in one pass over the engine queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
    pub top_category: Option<CategoryTotal>,
    pub breakdown: CategoryTotals,
    pub spend_percent: f64,
    pub over_budget: bool,
    pub budget: Budget,
    pub transaction_count: usize,
}

impl LedgerSummary {
    /// Share of total expenses for each breakdown entry, as a percentage.
    pub fn breakdown_shares(&self) -> Vec<(&str, f64)> {
        let total = self.breakdown.sum();
        self.breakdown
            .iter()
            .map(|entry| {
                let share = if total > 0.0 {
                    entry.amount / total * 100.0
                } else {
                    0.0
                };
                (entry.category.as_str(), share)
            })
            .collect()
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn snapshot(ledger: &Ledger) -> LedgerSummary {
        let breakdown = ledger.category_totals();
        LedgerSummary {
            balance: ledger.balance(),
            income: ledger.total_income(),
            expenses: ledger.total_expenses(),
            top_category: breakdown.max().cloned(),
            breakdown,
            spend_percent: ledger.spend_percent(),
            over_budget: ledger.is_over_budget(),
            budget: ledger.budget(),
            transaction_count: ledger.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;

    fn populated() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add("Salary", 2000.0, "Salary", TransactionKind::Income)
            .unwrap();
        ledger
            .add("Rent", 600.0, "Housing", TransactionKind::Expense)
            .unwrap();
        ledger
            .add("Groceries", 200.0, "Food", TransactionKind::Expense)
            .unwrap();
        ledger
    }

    #[test]
    fn snapshot_matches_engine_queries() {
        let mut ledger = populated();
        ledger.set_budget(700.0).unwrap();
        let summary = SummaryService::snapshot(&ledger);
        assert_eq!(summary.balance, ledger.balance());
        assert_eq!(summary.income, 2000.0);
        assert_eq!(summary.expenses, 800.0);
        assert_eq!(summary.top_category, ledger.top_expense_category());
        assert_eq!(summary.breakdown, ledger.category_totals());
        assert_eq!(summary.spend_percent, 40.0);
        assert!(summary.over_budget);
        assert_eq!(summary.transaction_count, 3);
    }

    #[test]
    fn breakdown_shares_sum_to_hundred() {
        let summary = SummaryService::snapshot(&populated());
        let shares = summary.breakdown_shares();
        assert_eq!(shares, vec![("Housing", 75.0), ("Food", 25.0)]);
    }

    #[test]
    fn empty_ledger_has_no_top_category() {
        let summary = SummaryService::snapshot(&Ledger::new());
        assert!(summary.top_category.is_none());
        assert!(summary.breakdown_shares().is_empty());
        assert_eq!(summary.spend_percent, 0.0);
        assert!(!summary.over_budget);
    }
}
