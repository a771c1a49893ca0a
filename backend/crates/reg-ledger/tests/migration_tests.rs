mod common;

use common::{LEGACY_FILE, create_ledger_with_contents, create_test_ledger, store_path};

use reg_core::Region;
use reg_ledger::{CURRENT_HEADER, LedgerError, MigrationOutcome};

use googletest::prelude::*;

#[tokio::test]
async fn given_legacy_store_when_migrated_then_current_header_and_backup_written() {
    // Given: A legacy four-column store
    let (temp, ledger) = create_ledger_with_contents(LEGACY_FILE);

    // When
    let outcome = ledger.migrate_legacy_if_needed().await.unwrap();

    // Then: One migrated row under the current header
    assert_that!(outcome, eq(MigrationOutcome::Migrated { rows: 1 }));

    let contents = std::fs::read_to_string(store_path(&temp)).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    let header = CURRENT_HEADER.join(",");
    assert_that!(lines, len(eq(2)));
    assert_that!(lines[0], eq(header.as_str()));
    assert_that!(
        lines[1],
        eq(",Ali Valiyev,998901112233,Samarqand,2024-01-01 10:00:00")
    );

    // And: The backup holds the original bytes
    let backup = std::fs::read_to_string(ledger.backup_path()).unwrap();
    assert_that!(backup, eq(LEGACY_FILE));
}

#[tokio::test]
async fn given_legacy_store_when_migrated_then_record_has_empty_identity() {
    // Given
    let (_temp, ledger) = create_ledger_with_contents(LEGACY_FILE);
    ledger.migrate_legacy_if_needed().await.unwrap();

    // When
    let found = ledger.find_by_phone("998901112233").await.unwrap();

    // Then
    assert_that!(found, some(anything()));
    let found = found.unwrap();
    assert_that!(found.identity, none());
    assert_that!(found.full_name, eq("Ali Valiyev"));
    assert_that!(found.region, eq(Region::Samarqand));
    assert_that!(found.registered_at_display(), eq("2024-01-01 10:00:00"));
}

#[tokio::test]
async fn given_migrated_store_when_migrating_again_then_no_op() {
    // Given
    let (temp, ledger) = create_ledger_with_contents(LEGACY_FILE);
    ledger.migrate_legacy_if_needed().await.unwrap();
    let after_first = std::fs::read_to_string(store_path(&temp)).unwrap();

    // When
    let outcome = ledger.migrate_legacy_if_needed().await.unwrap();

    // Then
    assert_that!(outcome, eq(MigrationOutcome::AlreadyCurrent));
    let after_second = std::fs::read_to_string(store_path(&temp)).unwrap();
    assert_that!(after_second, eq(&after_first));
    // Backup still holds the legacy original
    let backup = std::fs::read_to_string(ledger.backup_path()).unwrap();
    assert_that!(backup, eq(LEGACY_FILE));
}

#[tokio::test]
async fn given_missing_store_when_migrating_then_initialized_and_already_current() {
    // Given
    let (temp, ledger) = create_test_ledger();

    // When
    let outcome = ledger.migrate_legacy_if_needed().await.unwrap();

    // Then
    assert_that!(outcome, eq(MigrationOutcome::AlreadyCurrent));
    assert!(store_path(&temp).exists());
    assert!(!ledger.backup_path().exists());
}

#[tokio::test]
async fn given_legacy_store_when_first_read_then_migrated_transparently() {
    // Given: Nobody calls migrate explicitly
    let (temp, ledger) = create_ledger_with_contents(LEGACY_FILE);

    // When: First contact is a read
    let recent = ledger.list_recent(20).await.unwrap();

    // Then
    assert_that!(recent, len(eq(1)));
    assert!(ledger.backup_path().exists());
    let contents = std::fs::read_to_string(store_path(&temp)).unwrap();
    assert!(contents.starts_with("telegram_id,"));
}

#[tokio::test]
async fn given_legacy_store_when_first_contact_is_write_then_migrated_before_duplicate_check() {
    // Given
    let (_temp, ledger) = create_ledger_with_contents(LEGACY_FILE);

    // When: Registering a phone that exists only in legacy form
    let result = ledger
        .add_registration("555", "Vali Aliyev", "998 90 111 22 33", Region::Andijon)
        .await;

    // Then
    assert!(matches!(result, Err(LedgerError::DuplicatePhone { .. })));
}

#[tokio::test]
async fn given_legacy_store_with_padding_and_blank_rows_when_migrated_then_trimmed_and_blank_preserved()
 {
    // Given
    let seeded = "fullname,phone,region,created_at\n\
                  \"  Ali Valiyev \",\"+998 (90) 111-22-33\",\" Samarqand \",\" 2024-01-01 10:00:00 \"\n\
                  ,,,\n";
    let (temp, ledger) = create_ledger_with_contents(seeded);

    // When
    let outcome = ledger.migrate_legacy_if_needed().await.unwrap();

    // Then
    assert_that!(outcome, eq(MigrationOutcome::Migrated { rows: 2 }));
    let contents = std::fs::read_to_string(store_path(&temp)).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_that!(
        lines[1],
        eq(",Ali Valiyev,998901112233,Samarqand,2024-01-01 10:00:00")
    );
    assert_that!(ledger.list_recent(20).await.unwrap(), len(eq(1)));
}
