use super::transaction::{Transaction, TransactionKind};
use crate::errors::ValidationError;

/// Sentinel accepted by [`TransactionFilter::parse`] meaning "show all".
pub const WILDCARD: &str = "all";

/// Category and type constraints for listing transactions. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Builds a filter from raw selector values, treating missing or `all` as no constraint.
    pub fn parse(category: Option<&str>, kind: Option<&str>) -> Result<Self, ValidationError> {
        let category = category
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(WILDCARD))
            .map(str::to_string);
        let kind = match kind.map(str::trim) {
            None => None,
            Some(value) if value.is_empty() || value.eq_ignore_ascii_case(WILDCARD) => None,
            Some(value) => Some(value.parse()?),
        };
        Ok(Self { category, kind })
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| transaction.category == category);
        let kind_ok = self.kind.map_or(true, |kind| transaction.kind == kind);
        category_ok && kind_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_and_missing_values_match_everything() {
        let filter = TransactionFilter::parse(Some("all"), None).unwrap();
        assert_eq!(filter, TransactionFilter::all());
        let filter = TransactionFilter::parse(Some("ALL"), Some("all")).unwrap();
        assert_eq!(filter, TransactionFilter::all());
    }

    #[test]
    fn parse_rejects_unknown_type() {
        assert!(TransactionFilter::parse(None, Some("refund")).is_err());
    }

    #[test]
    fn matches_on_both_constraints() {
        let txn = Transaction::new(1, "Bus", 2.0, "Transport", TransactionKind::Expense).unwrap();
        assert!(TransactionFilter::all().matches(&txn));
        assert!(TransactionFilter::all().category("Transport").matches(&txn));
        assert!(!TransactionFilter::all()
            .category("Transport")
            .kind(TransactionKind::Income)
            .matches(&txn));
        assert!(!TransactionFilter::all().category("Food").matches(&txn));
    }
}
