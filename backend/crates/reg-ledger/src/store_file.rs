//! Reading and atomically replacing the CSV store file.

use crate::{CURRENT_HEADER, LedgerError, Result as LedgerErrorResult, StoreFormat, StoredRow};

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parsed store file
#[derive(Debug, Clone)]
pub struct StoreContents {
    pub header: Vec<String>,
    pub format: StoreFormat,
    pub rows: Vec<StoredRow>,
}

pub fn parse(bytes: &[u8]) -> LedgerErrorResult<StoreContents> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BYTE_ORDER_MARK).trim().to_string())
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(StoredRow::from_record(&header, &record?));
    }

    // Rows under a blank header cannot be mapped to columns, so the file
    // must not be treated as empty and rewritten
    let format = match StoreFormat::detect(&header) {
        StoreFormat::Empty if !rows.is_empty() => StoreFormat::Unknown,
        format => format,
    };

    Ok(StoreContents {
        header,
        format,
        rows,
    })
}

/// Serialize rows under the current header.
pub fn encode(path: &Path, rows: &[StoredRow]) -> LedgerErrorResult<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(CURRENT_HEADER)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }

    writer
        .into_inner()
        .map_err(|e| LedgerError::io(path, e.into_error()))
}

pub async fn read(path: &Path) -> LedgerErrorResult<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| LedgerError::io(path, e))
}

pub async fn read_contents(path: &Path) -> LedgerErrorResult<StoreContents> {
    parse(&read(path).await?)
}

/// Replace the store in one step: write a sibling temp file, then rename it
/// over the target. Readers see either the old or the new file.
pub async fn replace(path: &Path, bytes: &[u8]) -> LedgerErrorResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| LedgerError::io(parent, e))?;
    }

    let temp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
    if let Err(e) = write_synced(&temp_path, bytes).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(LedgerError::io(&temp_path, e));
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(LedgerError::io(path, e));
    }

    Ok(())
}

/// Write `bytes` and flush them to disk before the file is renamed into place
async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

pub async fn write_rows(path: &Path, rows: &[StoredRow]) -> LedgerErrorResult<()> {
    let bytes = encode(path, rows)?;
    replace(path, &bytes).await
}

/// `<path>.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    PathBuf::from(backup)
}
