//! One-time conversion of the legacy four-column layout.

use crate::store_file::{self, StoreContents};
use crate::{Result as LedgerErrorResult, StoreFormat, StoredRow};

use std::path::Path;

use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Store already uses the current header; nothing done
    AlreadyCurrent,
    /// Legacy store backed up and rewritten
    Migrated { rows: usize },
    /// Header matches neither layout; store left untouched
    UnknownFormat,
}

/// Convert the store at `path` if it carries the legacy header.
///
/// Caller must hold the ledger's exclusion section.
pub(crate) async fn migrate_if_needed(path: &Path) -> LedgerErrorResult<MigrationOutcome> {
    let bytes = store_file::read(path).await?;
    let StoreContents {
        header,
        format,
        rows,
    } = store_file::parse(&bytes)?;

    match format {
        StoreFormat::Current | StoreFormat::Empty => Ok(MigrationOutcome::AlreadyCurrent),
        StoreFormat::Unknown => {
            warn!(
                "Store {} has unrecognized header [{}], leaving it untouched",
                path.display(),
                header.join(",")
            );
            Ok(MigrationOutcome::UnknownFormat)
        }
        StoreFormat::Legacy => {
            let backup = store_file::backup_path(path);
            store_file::replace(&backup, &bytes).await?;

            let migrated: Vec<StoredRow> = rows.iter().map(StoredRow::migrated).collect();
            store_file::write_rows(path, &migrated).await?;

            info!(
                "Migrated legacy store {} ({} rows, backup at {})",
                path.display(),
                migrated.len(),
                backup.display()
            );

            Ok(MigrationOutcome::Migrated {
                rows: migrated.len(),
            })
        }
    }
}
