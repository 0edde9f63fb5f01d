use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::tempdir;

use finance_core::errors::LedgerError;
use finance_core::ledger::{CategoryTaxonomy, Ledger, Transaction, TransactionKind};
use finance_core::storage::{JsonStorage, StorageBackend};

fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            dec!(5000),
            "Salary",
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        ),
        Transaction::new(
            dec!(1500),
            "Rent",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        ),
        Transaction::new(
            dec!(300),
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
        ),
    ]
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn save_and_load_roundtrip_preserves_order() {
    let temp = tempdir().unwrap();
    let store = JsonStorage::new(temp.path().join("finance_data.json"));

    let transactions = sample_transactions();
    store.save(&transactions).expect("save transactions");
    let loaded = store.load().expect("load transactions");
    assert_eq!(loaded, transactions);
}

#[test]
fn missing_file_loads_as_empty() {
    let temp = tempdir().unwrap();
    let store = JsonStorage::new(temp.path().join("nothing_here.json"));
    assert!(store.load().expect("load").is_empty());
}

#[test]
fn malformed_data_is_a_fatal_storage_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("finance_data.json");
    fs::write(&path, "{not json").unwrap();

    let err = JsonStorage::new(&path).load().unwrap_err();
    assert!(matches!(err, LedgerError::Storage(_)));

    // Opening a ledger over the same file surfaces the same failure.
    let result = Ledger::open(
        CategoryTaxonomy::default(),
        Box::new(JsonStorage::new(&path)),
    );
    assert!(result.is_err());
}

#[test]
fn persisted_records_use_stable_wire_keys() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("finance_data.json");
    let store = JsonStorage::new(&path);
    store.save(&sample_transactions()).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().expect("top-level array");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["type"], "income");
    assert_eq!(records[1]["type"], "expenses");
    assert_eq!(records[1]["amount"], serde_json::json!(1500.0));
    assert_eq!(records[2]["date"], "2024-01-25");
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("finance_data.json");
    let store = JsonStorage::new(&path);

    let mut transactions = sample_transactions();
    store.save(&transactions).expect("initial save");
    let original = fs::read_to_string(&path).expect("read original file");

    // Create a directory that collides with the temp file name to force
    // File::create to fail.
    let tmp_path = tmp_path_for(&path);
    fs::create_dir_all(&tmp_path).unwrap();

    transactions.push(Transaction::new(
        dec!(99),
        "Shopping",
        TransactionKind::Expense,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    ));
    assert!(
        store.save(&transactions).is_err(),
        "expected save to fail when temp path is a directory"
    );

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "atomic save failure must not corrupt the original file"
    );

    let _ = fs::remove_dir_all(&tmp_path);
}

#[test]
fn ledger_writes_through_after_every_add() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("finance_data.json");

    let mut ledger = Ledger::open(
        CategoryTaxonomy::default(),
        Box::new(JsonStorage::new(&path)),
    )
    .unwrap();
    ledger
        .add_transaction(
            dec!(5000),
            "Salary",
            TransactionKind::Income,
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        )
        .unwrap();

    // A fresh backend over the same path already sees the append.
    let persisted = JsonStorage::new(&path).load().unwrap();
    assert_eq!(persisted.len(), 1);

    ledger
        .add_transaction(
            dec!(200),
            "Transportation",
            TransactionKind::Expense,
            Some(NaiveDate::from_ymd_opt(2024, 1, 28).unwrap()),
        )
        .unwrap();
    assert_eq!(JsonStorage::new(&path).load().unwrap().len(), 2);
}

#[test]
fn reloaded_ledger_matches_original_sequence() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("finance_data.json");

    let mut ledger = Ledger::open(
        CategoryTaxonomy::default(),
        Box::new(JsonStorage::new(&path)),
    )
    .unwrap();
    for txn in sample_transactions() {
        ledger
            .add_transaction(txn.amount, &txn.category, txn.kind, Some(txn.date))
            .unwrap();
    }

    let reloaded = Ledger::open(
        CategoryTaxonomy::default(),
        Box::new(JsonStorage::new(&path)),
    )
    .unwrap();
    assert_eq!(reloaded.transactions(), ledger.transactions());
    assert_eq!(reloaded.balance(), ledger.balance());
}
