#![allow(dead_code)]

use reg_ledger::{Ledger, LedgerSync};

use std::path::PathBuf;

use tempfile::TempDir;

pub const LEGACY_FILE: &str = "fullname,phone,region,created_at\n\
Ali Valiyev,+998901112233,Samarqand,2024-01-01 10:00:00\n";

/// Ledger over a store path inside a fresh temp dir. The file is not created.
pub fn create_test_ledger() -> (TempDir, Ledger) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let ledger = Ledger::new(store_path(&temp), LedgerSync::new());
    (temp, ledger)
}

/// Ledger over a store pre-seeded with `contents`
pub fn create_ledger_with_contents(contents: &str) -> (TempDir, Ledger) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = store_path(&temp);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).expect("Failed to seed store");
    let ledger = Ledger::new(path, LedgerSync::new());
    (temp, ledger)
}

pub fn store_path(temp: &TempDir) -> PathBuf {
    temp.path().join("data").join("registrations.csv")
}

/// Phone number unique per `n`
pub fn phone_for(n: usize) -> String {
    format!("+998 90 {:03}-{:02}-{:02}", n, n % 100, (n * 7) % 100)
}

/// Current-format row
pub fn current_row(identity: &str, full_name: &str, phone: &str, region: &str) -> String {
    format!("{identity},{full_name},{phone},{region},2024-02-01 09:30:00\n")
}
