//! Registration ledger - durable store of event sign-ups.

use crate::migration::{self, MigrationOutcome};
use crate::store_file;
use crate::{LedgerError, LedgerSync, Result as LedgerErrorResult, StoreFormat, StoredRow};

use reg_core::{Region, Registration, normalize_phone};

use std::collections::HashMap;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Append/repair-only record store backed by a CSV file.
///
/// Keeps an in-memory snapshot of the file with first-match indexes on
/// identity and phone. The file is the durable copy and is replaced
/// atomically on every write. Writes run inside the [`LedgerSync`] section;
/// reads only take the snapshot lock and see either the pre- or post-write
/// state.
///
/// The store is prepared (created, migrated, loaded) on first contact, so
/// callers never need to sequence initialization.
pub struct Ledger {
    inner: Arc<LedgerInner>,
}

struct LedgerInner {
    path: PathBuf,
    sync: LedgerSync,
    snapshot: RwLock<Option<Arc<Snapshot>>>,
}

#[derive(Debug, Clone)]
struct Snapshot {
    format: StoreFormat,
    header: Vec<String>,
    rows: Vec<StoredRow>,
    /// identity -> index of the first row carrying it
    by_identity: HashMap<String, usize>,
    /// normalized phone -> index of the first row carrying it
    by_phone: HashMap<String, usize>,
}

impl Snapshot {
    fn new(format: StoreFormat, header: Vec<String>, rows: Vec<StoredRow>) -> Self {
        let mut snapshot = Self {
            format,
            header,
            rows: Vec::with_capacity(rows.len()),
            by_identity: HashMap::new(),
            by_phone: HashMap::new(),
        };
        for row in rows {
            snapshot.push(row);
        }
        snapshot
    }

    fn push(&mut self, row: StoredRow) {
        let idx = self.rows.len();
        self.index(idx, &row);
        self.rows.push(row);
    }

    fn index(&mut self, idx: usize, row: &StoredRow) {
        let identity = row.identity_key();
        if !identity.is_empty() {
            self.by_identity.entry(identity.to_string()).or_insert(idx);
        }
        let phone = row.phone_key();
        if !phone.is_empty() {
            self.by_phone.entry(phone).or_insert(idx);
        }
    }

    fn set_identity(&mut self, idx: usize, identity: &str) {
        self.rows[idx].identity = identity.to_string();
        self.by_identity.entry(identity.to_string()).or_insert(idx);
    }

    #[track_caller]
    fn ensure_writable(&self) -> LedgerErrorResult<()> {
        if self.format.is_writable() {
            Ok(())
        } else {
            Err(LedgerError::UnsupportedFormat {
                header: self.header.join(","),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    fn registration_at(&self, idx: usize) -> Option<Registration> {
        let row = self.rows.get(idx)?;
        match row.to_registration() {
            Ok(registration) => Some(registration),
            Err(e) => {
                warn!("Skipping unreadable store row {}: {}", idx + 1, e);
                None
            }
        }
    }
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>, sync: LedgerSync) -> Self {
        Self {
            inner: Arc::new(LedgerInner {
                path: path.into(),
                sync,
                snapshot: RwLock::new(None),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Where migration keeps the pre-migration copy
    pub fn backup_path(&self) -> PathBuf {
        store_file::backup_path(&self.inner.path)
    }

    /// Create the store with the current header if it does not exist.
    pub async fn ensure_initialized(&self) -> LedgerErrorResult<()> {
        let _guard = self.inner.sync.enter().await;
        self.ensure_initialized_locked().await
    }

    /// Convert a legacy-format store to the current layout.
    ///
    /// The original file is kept at [`Ledger::backup_path`]. Unknown formats
    /// are left untouched and reported as [`MigrationOutcome::UnknownFormat`].
    pub async fn migrate_legacy_if_needed(&self) -> LedgerErrorResult<MigrationOutcome> {
        let _guard = self.inner.sync.enter().await;
        self.ensure_initialized_locked().await?;
        let outcome = migration::migrate_if_needed(&self.inner.path).await?;
        self.reload_locked().await?;
        Ok(outcome)
    }

    pub async fn find_by_identity(&self, identity: &str) -> LedgerErrorResult<Option<Registration>> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Ok(None);
        }

        let snapshot = self.snapshot().await?;
        Ok(snapshot
            .by_identity
            .get(identity)
            .and_then(|&idx| snapshot.registration_at(idx)))
    }

    pub async fn find_by_phone(&self, phone: &str) -> LedgerErrorResult<Option<Registration>> {
        let phone = normalize_phone(phone);
        if phone.is_empty() {
            return Ok(None);
        }

        let snapshot = self.snapshot().await?;
        Ok(snapshot
            .by_phone
            .get(&phone)
            .and_then(|&idx| snapshot.registration_at(idx)))
    }

    /// Append a new registration.
    ///
    /// Duplicate checks and the write happen inside one exclusion section, so
    /// racing submissions for the same identity or phone produce exactly one
    /// record.
    pub async fn add_registration(
        &self,
        identity: &str,
        full_name: &str,
        phone: &str,
        region: Region,
    ) -> LedgerErrorResult<Registration> {
        let identity = identity.trim();
        let phone = normalize_phone(phone);

        let _guard = self.inner.sync.enter().await;
        let current = self.loaded_locked().await?;
        current.ensure_writable()?;

        if !identity.is_empty() && current.by_identity.contains_key(identity) {
            debug!("Refusing registration: identity {identity} already registered");
            return Err(LedgerError::DuplicateIdentity {
                identity: identity.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !phone.is_empty() && current.by_phone.contains_key(&phone) {
            debug!("Refusing registration: phone {phone} already registered");
            return Err(LedgerError::DuplicatePhone {
                phone,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let registration = Registration::new(identity, full_name, &phone, region)?;

        let mut next = Snapshot::clone(&current);
        next.format = StoreFormat::Current;
        next.push(StoredRow::from(&registration));
        self.commit_locked(next).await?;

        info!(
            "Registered {} ({}) from {}",
            registration.identity_str(),
            registration.phone,
            registration.region
        );

        Ok(registration)
    }

    /// Attach `identity` to the first record carrying `phone` if that record
    /// has no identity yet.
    ///
    /// Only the first matching record is considered. Returns `false` without
    /// changes when nothing matches, the record is already bound, or the
    /// identity is bound to another record.
    pub async fn bind_identity_by_phone(
        &self,
        identity: &str,
        phone: &str,
    ) -> LedgerErrorResult<bool> {
        let identity = identity.trim();
        let phone = normalize_phone(phone);
        if phone.is_empty() || identity.is_empty() {
            return Ok(false);
        }

        let _guard = self.inner.sync.enter().await;
        let current = self.loaded_locked().await?;
        current.ensure_writable()?;

        let Some(&idx) = current.by_phone.get(&phone) else {
            return Ok(false);
        };

        if !current.rows[idx].identity_key().is_empty() {
            debug!("Phone {phone} already bound, not rebinding to {identity}");
            return Ok(false);
        }

        if let Some(&other) = current.by_identity.get(identity) {
            warn!(
                "Identity {identity} already bound to store row {}, not binding phone {phone}",
                other + 1
            );
            return Ok(false);
        }

        let mut next = Snapshot::clone(&current);
        next.set_identity(idx, identity);
        self.commit_locked(next).await?;

        info!("Bound identity {identity} to phone {phone}");
        Ok(true)
    }

    /// Up to `limit` most recent registrations, oldest first.
    ///
    /// Blank and unreadable rows are skipped before the window is taken.
    pub async fn list_recent(&self, limit: usize) -> LedgerErrorResult<Vec<Registration>> {
        let snapshot = self.snapshot().await?;

        let readable: Vec<Registration> = snapshot
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_blank())
            .filter_map(|(idx, _)| snapshot.registration_at(idx))
            .collect();

        let skip = readable.len().saturating_sub(limit);
        Ok(readable.into_iter().skip(skip).collect())
    }

    /// Raw bytes of the current-format store, for the admin export.
    pub async fn export(&self) -> LedgerErrorResult<Vec<u8>> {
        self.snapshot().await?;
        store_file::read(&self.inner.path).await
    }

    // ------------------------------------------------------------------ //

    /// Current snapshot, preparing the store on first contact.
    async fn snapshot(&self) -> LedgerErrorResult<Arc<Snapshot>> {
        if let Some(snapshot) = self.inner.snapshot.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let _guard = self.inner.sync.enter().await;
        self.loaded_locked().await
    }

    /// Snapshot for callers already inside the exclusion section.
    async fn loaded_locked(&self) -> LedgerErrorResult<Arc<Snapshot>> {
        if let Some(snapshot) = self.inner.snapshot.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        self.ensure_initialized_locked().await?;
        migration::migrate_if_needed(&self.inner.path).await?;
        self.reload_locked().await
    }

    async fn reload_locked(&self) -> LedgerErrorResult<Arc<Snapshot>> {
        let contents = store_file::read_contents(&self.inner.path).await?;
        let snapshot = Arc::new(Snapshot::new(
            contents.format,
            contents.header,
            contents.rows,
        ));

        debug!(
            "Loaded {} store rows from {} ({:?})",
            snapshot.rows.len(),
            self.inner.path.display(),
            snapshot.format
        );

        *self.inner.snapshot.write().await = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    async fn ensure_initialized_locked(&self) -> LedgerErrorResult<()> {
        let path = &self.inner.path;

        let needs_header = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(LedgerError::io(path, e)),
        };

        if needs_header {
            store_file::write_rows(path, &[]).await?;
            info!("Initialized registration store at {}", path.display());
        }

        Ok(())
    }

    async fn commit_locked(&self, next: Snapshot) -> LedgerErrorResult<()> {
        store_file::write_rows(&self.inner.path, &next.rows).await?;
        *self.inner.snapshot.write().await = Some(Arc::new(next));
        Ok(())
    }
}

impl Clone for Ledger {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
