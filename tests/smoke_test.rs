use spend_tracker::{
    core::{services::SummaryService, LedgerSession},
    init,
    ledger::TransactionKind,
    storage::MemoryStorage,
};

#[test]
fn session_summary_smoke() {
    init();

    let mut session = LedgerSession::open(Box::new(MemoryStorage::new()));
    session
        .add("Salary", 5000.0, "Salary", TransactionKind::Income)
        .unwrap();
    session
        .add("Groceries", 1200.0, "Food", TransactionKind::Expense)
        .unwrap();
    session.set_budget(1000.0).unwrap();

    let summary = session.summary();
    assert_eq!(summary, SummaryService::snapshot(session.ledger()));
    assert_eq!(summary.transaction_count, 2);
    assert_eq!(summary.spend_percent, 24.0);
    assert!(summary.over_budget);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["breakdown"][0]["category"], "Food");
    assert_eq!(json["top_category"]["amount"], 1200.0);
    assert_eq!(json["budget"], 1000.0);
}
