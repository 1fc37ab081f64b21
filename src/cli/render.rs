//! Plain-text views of ledger data. Styling is applied by the caller.

use crate::{
    core::services::LedgerSummary,
    currency::{format_currency_value, format_percent, format_signed, CurrencyCode, LocaleConfig},
    ledger::Transaction,
};

const FILLED: char = '#';
const EMPTY: char = '-';
const CHART_BLOCK: char = '█';
const NO_TOP_CATEGORY: &str = "None yet";

/// Currency and locale used for every rendered amount.
#[derive(Debug, Clone)]
pub struct Money {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
}

impl Money {
    pub fn new(code: CurrencyCode, locale: LocaleConfig) -> Self {
        Self { code, locale }
    }

    pub fn format(&self, amount: f64) -> String {
        format_currency_value(amount, &self.code, &self.locale)
    }
}

pub fn transaction_line(txn: &Transaction, money: &Money) -> String {
    format!(
        "#{:<4} {} ({}) {}",
        txn.id,
        txn.description,
        txn.category,
        format_signed(txn.amount, txn.kind, &money.code, &money.locale)
    )
}

pub fn top_category_label(summary: &LedgerSummary, money: &Money) -> String {
    match &summary.top_category {
        Some(top) => format!("{} ({})", top.category, money.format(top.amount)),
        None => NO_TOP_CATEGORY.to_string(),
    }
}

/// `[#####-----] 50.0%` for a percentage in `[0, 100]`.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar.push(']');
    format!("{} {}", bar, format_percent(percent))
}

pub fn summary_lines(summary: &LedgerSummary, money: &Money, width: usize) -> Vec<String> {
    let budget = if summary.budget.is_set() {
        money.format(summary.budget.limit())
    } else {
        "not set".to_string()
    };
    vec![
        format!("Balance:      {}", money.format(summary.balance)),
        format!("Income:       {}", money.format(summary.income)),
        format!("Expenses:     {}", money.format(summary.expenses)),
        format!("Top spending: {}", top_category_label(summary, money)),
        format!("Budget:       {}", budget),
        format!("Spent:        {}", progress_bar(summary.spend_percent, width)),
    ]
}

pub fn budget_warning(summary: &LedgerSummary, money: &Money) -> Option<String> {
    summary.over_budget.then(|| {
        format!(
            "Budget exceeded: spent {} of {}",
            money.format(summary.expenses),
            money.format(summary.budget.limit())
        )
    })
}

/// One row per expense category, with a bar proportional to its share.
pub fn chart_rows(summary: &LedgerSummary, money: &Money, width: usize) -> Vec<String> {
    let label_width = summary
        .breakdown
        .iter()
        .map(|entry| entry.category.chars().count())
        .max()
        .unwrap_or(0);
    summary
        .breakdown
        .iter()
        .zip(summary.breakdown_shares())
        .map(|(entry, (_, share))| {
            let blocks = ((share / 100.0) * width as f64).round() as usize;
            let bar: String = std::iter::repeat(CHART_BLOCK).take(blocks.max(1)).collect();
            format!(
                "{:<label_width$}  {:>14}  {:>6}  {}",
                entry.category,
                money.format(entry.amount),
                format_percent(share),
                bar,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::SummaryService;
    use crate::ledger::{Ledger, TransactionKind};

    fn money() -> Money {
        Money::new(CurrencyCode::new("NGN"), LocaleConfig::default())
    }

    #[test]
    fn progress_bar_scales_to_width() {
        assert_eq!(progress_bar(50.0, 10), "[#####-----] 50.0%");
        assert_eq!(progress_bar(0.0, 4), "[----] 0.0%");
        assert_eq!(progress_bar(100.0, 4), "[####] 100.0%");
    }

    #[test]
    fn transaction_line_shows_signed_amount() {
        let txn =
            Transaction::new(12, "Groceries", 120.5, "Food", TransactionKind::Expense).unwrap();
        assert_eq!(
            transaction_line(&txn, &money()),
            "#12   Groceries (Food) -₦120.50"
        );
    }

    #[test]
    fn summary_reports_missing_top_category() {
        let summary = SummaryService::snapshot(&Ledger::new());
        let lines = summary_lines(&summary, &money(), 10);
        assert!(lines.contains(&"Top spending: None yet".to_string()));
        assert!(lines.contains(&"Budget:       not set".to_string()));
        assert!(budget_warning(&summary, &money()).is_none());
    }

    #[test]
    fn warning_appears_when_over_budget() {
        let mut ledger = Ledger::new();
        ledger.set_budget(1000.0).unwrap();
        ledger
            .add("Rent", 1200.0, "Housing", TransactionKind::Expense)
            .unwrap();
        let summary = SummaryService::snapshot(&ledger);
        assert_eq!(
            budget_warning(&summary, &money()).as_deref(),
            Some("Budget exceeded: spent ₦1,200.00 of ₦1,000.00")
        );
    }

    #[test]
    fn chart_rows_follow_breakdown_order() {
        let mut ledger = Ledger::new();
        ledger
            .add("Bus", 25.0, "Transport", TransactionKind::Expense)
            .unwrap();
        ledger
            .add("Lunch", 75.0, "Food", TransactionKind::Expense)
            .unwrap();
        let rows = chart_rows(&SummaryService::snapshot(&ledger), &money(), 4);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Transport"));
        assert!(rows[0].ends_with("25.0%  █"));
        assert!(rows[1].ends_with("75.0%  ███"));
    }
}
