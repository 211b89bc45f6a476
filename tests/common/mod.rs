#![allow(dead_code)]

use std::path::PathBuf;

use family_ledger::{
    domain::{TransactionKind, TransactionRecord},
    storage::save_transactions_to_path,
};
use tempfile::TempDir;

pub fn income(date: &str, amount: f64) -> TransactionRecord {
    TransactionRecord::new(date, amount).with_kind(TransactionKind::Income)
}

pub fn expense(date: &str, amount: f64) -> TransactionRecord {
    TransactionRecord::new(date, amount).with_kind(TransactionKind::Expense)
}

/// A small month of family activity used across suites.
pub fn january_household() -> Vec<TransactionRecord> {
    vec![
        income("2026-01-02", 500.0).with_category("Salary"),
        expense("2026-01-02", 45.5).with_category("Food"),
        TransactionRecord::new("2026-01-05", 20.0)
            .with_category("Allowance")
            .with_note("From Dad"),
        TransactionRecord::new("2026-01-05", 12.0).with_category("Toys"),
        TransactionRecord::new("2026-01-06", 50.0).with_note("To Sister"),
        TransactionRecord::new("2026-01-10", 30.0)
            .with_kind(TransactionKind::Transfer)
            .with_category("Granted"),
        expense("2026-01-20", 80.0).with_category("Food"),
    ]
}

/// Writes `transactions` to a JSON file inside a fresh temp dir.
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_fixture(transactions: &[TransactionRecord]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("transactions.json");
    save_transactions_to_path(transactions, &path).expect("write fixture");
    (dir, path)
}
